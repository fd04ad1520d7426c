//! The Factory Method abstractions.
//!
//! This module provides the two traits every creator and product in the crate is
//! built on.
//!
//! # Main Components
//!
//! - [`Message`] - Trait implemented by every product
//! - [`MessageCreator`] - Trait implemented by every creator; declares the factory method
//!
//! # Testing
//!
//! See [`mock`] module for a creator that records how it is used.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
