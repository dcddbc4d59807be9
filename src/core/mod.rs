//! Core library components.
//!
//! Credential resolution, the sources it draws from, and the project
//! configuration that tunes them.

pub mod config;
pub mod constants;
pub mod credentials;
pub mod fs;
pub mod identity;
pub mod properties;
pub mod resolver;
pub mod source;
