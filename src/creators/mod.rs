//! Concrete creators. Each one overrides
//! [`factory_method`](crate::framework::MessageCreator::factory_method) to pick
//! the product type, and inherits everything else.

pub mod email;
pub mod sms;

pub use email::*;
pub use sms::*;
