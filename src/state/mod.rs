//! Value types shared by pagination, search, and the backend sources.
//!
//! Behaviour attached to these types (visibility policy, page math) lives in
//! `crate::logic`; this module only defines their shape.

pub mod types;

pub use types::{ListFilter, PageMarker, PageWindow, Post, Role, Viewer, Visibility};
