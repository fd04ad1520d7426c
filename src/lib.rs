#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Factory Method Recipe
//!
//! > **The Factory Method pattern, the Rust way.**
//!
//! This crate shows how a creator can hand the decision of *which* object to build
//! to its implementers, while the code that uses the object only ever sees an
//! abstract product.
//!
//! ## 🏗️ Design Philosophy
//!
//! In a class-based language the creator is an abstract base class with an abstract
//! `factory_method` and a concrete `some_operation`. In Rust this is a trait with one
//! **required method** and one **provided method**:
//!
//! - [`MessageCreator::factory_method`](framework::MessageCreator::factory_method) -
//!   each creator decides which [`Message`](framework::Message) it returns.
//! - [`MessageCreator::some_operation`](framework::MessageCreator::some_operation) -
//!   written once, works for every creator, never names a concrete product.
//!
//! A creator that forgets to implement the factory method does not compile.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Abstractions ([`framework`])
//! - **Key items**: [`Message`](framework::Message), [`MessageCreator`](framework::MessageCreator).
//! - See [`framework::mock`] for a creator that counts calls in tests.
//!
//! ### 2. The Products ([`model`])
//! - [`SmsMessage`](model::SmsMessage), [`EmailMessage`](model::EmailMessage).
//!
//! ### 3. The Creators ([`creators`])
//! - [`SmsMessageCreator`](creators::SmsMessageCreator), [`EmailMessageCreator`](creators::EmailMessageCreator).
//!
//! ### 4. The Client ([`clients`])
//! - [`client_code`](clients::client_code) accepts *any* creator.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! - [`run_demo`](lifecycle::run_demo) runs the client with both creators;
//!   [`launch`](lifecycle::launch) does the same on stdout.
//! - [`setup_tracing`](lifecycle::setup_tracing) sends logs to stderr.
//!
//! ### 6. Errors ([`error`])
//! - [`DemoError`](error::DemoError): the only failure is writing the output.
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use factory_method_recipe::clients::write_client_code;
//! use factory_method_recipe::creators::SmsMessageCreator;
//!
//! let mut out = Vec::new();
//! write_client_code(&mut out, &SmsMessageCreator).unwrap();
//! assert!(String::from_utf8(out).unwrap().ends_with("Message sent by SMS"));
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! # Transcript on stdout, logs on stderr
//! RUST_LOG=debug cargo run
//! ```

pub mod clients;
pub mod creators;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod model;
