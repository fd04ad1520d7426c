//! Concrete products implementing the [`Message`](crate::framework::Message) trait.

pub mod email;
pub mod sms;

pub use email::*;
pub use sms::*;
