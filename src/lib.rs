#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod encoding;
mod error;
mod manager;
mod param;

// Public API
pub use error::{ErrorCode, ManagerError};
pub use manager::UrlManager;
pub use param::UrlParam;

pub type Result<T> = core::result::Result<T, ManagerError>;
