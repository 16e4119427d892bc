//! Core types for the cask allocation toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the block-size policy shared by every pool ([`PoolConfig`]) and the
//! error vocabulary used across the workspace ([`AllocError`],
//! [`ContainerError`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;

pub use config::PoolConfig;
pub use error::{AllocError, ContainerError};
