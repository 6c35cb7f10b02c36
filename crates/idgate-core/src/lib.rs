//! # idgate-core
//!
//! Core crate for Idgate. Contains the unified error system shared by
//! every other crate in the workspace.
//!
//! This crate has **no** internal dependencies on other Idgate crates.

pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
