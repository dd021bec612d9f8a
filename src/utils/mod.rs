//! Utility functions.
//!
//! This module provides string sanitization for per-item notes.

pub mod sanitize;
