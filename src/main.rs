//! Runs the Factory Method demo.
//!
//! Standard output receives the transcript from
//! [`launch`](factory_method_recipe::lifecycle::launch); logs go to stderr.

use factory_method_recipe::error::DemoError;
use factory_method_recipe::lifecycle::{launch, setup_tracing};
use tracing::info;

fn main() -> Result<(), DemoError> {
    setup_tracing();

    info!("Starting factory method demo");

    launch()?;

    info!("Demo completed successfully");
    Ok(())
}
