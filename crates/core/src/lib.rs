//! `storefront-core`: shared building blocks for the storefront catalog.
//!
//! This crate contains **pure** primitives (no IO): the error model and the
//! strongly-typed identifiers every other crate speaks in.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{ProductId, Slug};
