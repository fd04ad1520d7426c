//! # Core Factory Method Abstractions
//!
//! This module defines the two capabilities the rest of the crate is built on.
//!
//! ## Key Types
//!
//! - [`Message`]: The product trait. Every concrete message implements it.
//! - [`MessageCreator`]: The creator trait with the factory method and the
//!   shared business logic that depends on it.

use std::fmt::Debug;
use tracing::debug;

/// Prefix that [`MessageCreator::some_operation`] puts in front of the product's output.
pub const CREATOR_PREFIX: &str = "Creator: The same creator's code has just worked with ";

// =============================================================================
// 1. THE PRODUCT
// =============================================================================

/// Trait that every product returned by a factory method implements.
///
/// # Architecture Note
/// Client code and creators only ever talk to `dyn Message`. The concrete type
/// (SMS, E-Mail, ...) stays hidden behind the factory method that produced it.
pub trait Message: Debug {
    /// Simulate delivery and describe what happened.
    fn send(&self) -> String;
}

// =============================================================================
// 2. THE CREATOR
// =============================================================================

/// Trait that declares the factory method for [`Message`] products.
///
/// # Architecture Note
/// Implementers only decide *which* product gets built. The business logic in
/// [`MessageCreator::some_operation`] is written once here and works with every
/// implementer, because it only relies on the abstract product.
///
/// The factory method returns `Box<dyn Message>` rather than an associated type,
/// so the trait stays object safe and clients can hold a `&dyn MessageCreator`.
///
/// # Provided Methods
/// - [`MessageCreator::some_operation`]
///
/// You do **not** need to implement it; overriding `factory_method` is enough to
/// change what it works with.
pub trait MessageCreator {
    /// Build the product this creator is responsible for.
    fn factory_method(&self) -> Box<dyn Message>;

    /// Business logic that relies on the product returned by [`Self::factory_method`].
    ///
    /// Calls the factory method exactly once and sends the product exactly once.
    fn some_operation(&self) -> String {
        let creator = short_type_name::<Self>();

        let product = self.factory_method();
        debug!(creator, ?product, "Factory method returned product");

        let result = format!("{}{}", CREATOR_PREFIX, product.send());
        debug!(creator, %result, "some_operation");
        result
    }
}

/// Extracts the last path segment of a type name
/// (e.g. `"SmsMessageCreator"` instead of `"factory_method_recipe::creators::sms::SmsMessageCreator"`).
pub fn short_type_name<T: ?Sized>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
