//! Common utilities module
//!
//! This module contains shared utilities used across the forensics pipeline.

pub mod error;

pub use error::{ForensicsError, Result};
