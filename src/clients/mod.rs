//! Client code that only knows about [`MessageCreator`](crate::framework::MessageCreator).

pub mod client_code;

pub use client_code::*;
