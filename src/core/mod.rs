//! Core components of the `ns-api-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`NsClient`] and its builder.
//! - The primary [`NsError`] type.
//! - The shared authenticated request routine every endpoint funnels through.

/// The main client (`NsClient`), builder, and credential handling.
pub mod client;
/// The primary error type (`NsError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::NsClient`
pub use client::{NsClient, NsClientBuilder};
pub use error::NsError;

/// Parsed XML response body, owned by the caller.
///
/// The client performs no validation beyond parseability; navigate the tree
/// with [`xmltree::Element`]'s accessors (`get_child`, `children`, ...).
pub type Document = xmltree::Element;
