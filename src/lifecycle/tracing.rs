//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the demo.
//!
//! ## Configuration
//!
//! Log lines go to **stderr**, so standard output only ever contains the demo
//! transcript. The format is compact and hides the module prefix
//! (`with_target(false)`); the creator type is recorded as a field instead.
//!
//! ## What Gets Traced
//!
//! - **Demo steps**: Which creator is being launched (`info`)
//! - **Client code**: A `write_client_code` span carrying the creator type
//! - **Creator logic**: The product returned by the factory method and the result (`debug`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Only the transcript (default)
//! cargo run
//!
//! # Demo steps
//! RUST_LOG=info cargo run
//!
//! # Factory method calls and results
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` stderr shows:
//!
//! ```text
//! INFO Launching creator="SMSMessageCreator"
//! DEBUG write_client_code: Factory method returned product creator="SmsMessageCreator" product=SmsMessage
//! DEBUG write_client_code: some_operation creator="SmsMessageCreator" result=Creator: ...
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr) // stdout is reserved for the transcript
        .with_target(false)
        .compact()
        .init();
}
