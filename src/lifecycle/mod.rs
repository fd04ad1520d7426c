//! Demo orchestration and observability.
//!
//! # Main Components
//!
//! - [`run_demo`] - Runs the fixed two-step demo against any writer
//! - [`launch`] - Runs the same demo on stdout through [`client_code`](crate::clients::client_code)
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod demo;
pub mod tracing;

pub use self::demo::*;
pub use self::tracing::*;
