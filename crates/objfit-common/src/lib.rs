//! Common utilities for objfit.
//!
//! This crate provides shared infrastructure used by all objfit components:
//! - **Warning System** - colored terminal output for input that was degraded
//!   to a fallback instead of being rejected

pub mod warning;
