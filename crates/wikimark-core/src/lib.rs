//! Wikimark Core
//!
//! This crate provides the shared types and error definitions
//! for the wikimark inline emphasis engine.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`DelimiterType`], [`DelimiterSet`], [`ListMarker`], [`OpaqueKind`] - Syntax enums
//! - [`WikimarkError`] - Error types
//! - [`Span`] - Byte ranges within a line

pub mod enums;
pub mod error;
pub mod types;

pub use enums::{DelimiterSet, DelimiterType, ListMarker, OpaqueKind};
pub use error::{Result, WikimarkError};
pub use types::Span;
