//! CLI functionality for the hra tool
//!
//! This module contains all CLI-related functionality including:
//! - Full pipeline assessment
//! - Derived-variable inspection
//! - Configuration validation
//! - Input loading
//! - Output formatting

#[cfg(feature = "cli")]
pub mod assess;
#[cfg(feature = "cli")]
pub mod loader;
#[cfg(feature = "cli")]
pub mod output;
#[cfg(feature = "cli")]
pub mod validate;
#[cfg(feature = "cli")]
pub mod vars;
