//! Annotation and point-list file I/O.
//!
//! This module provides the file seams around the projection pipeline.
//!
//! # Supported Files
//!
//! | Kind | Format | Load | Save | Notes |
//! |------|--------|------|------|-------|
//! | Annotations | JSON, two parallel arrays | ✓ | ✓ | [`json`] |
//! | Point lists | plain text, `x y z` per line | ✓ | ✗ | [`points`] |
//!
//! The annotation format is the only output format, so the top-level
//! [`save`] and [`load`] are straight aliases for the [`json`] pair:
//!
//! ```no_run
//! use lenscast::annotate::CoordinateSet;
//! use lenscast::io;
//!
//! let set = CoordinateSet::new();
//! io::save(&set, "annotations.json").unwrap();
//! let restored = io::load("annotations.json").unwrap();
//! assert_eq!(restored, set);
//! ```
//!
//! [`naming`] generates collision-free output names for batch runs.

pub mod json;
pub mod naming;
pub mod points;

pub use json::{load, save};
