//! Storage layer for reqres-client
//!
//! Handles configuration file management (TOML).

use crate::error::AppError;

pub mod config;

type Result<T> = std::result::Result<T, AppError>;
