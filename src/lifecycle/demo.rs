use crate::clients::{client_code, write_client_code};
use crate::creators::{EmailMessageCreator, SmsMessageCreator};
use crate::error::DemoError;
use crate::framework::MessageCreator;
use std::io::{self, Write};
use tracing::info;

/// Separator written between the two demo runs.
pub const SEPARATOR: &str = "\n\n";

/// Creators the demo launches, in order, with the name announced for each.
pub const LAUNCHES: [(&str, &dyn MessageCreator); 2] = [
    ("SMSMessageCreator", &SmsMessageCreator),
    ("EmailMessageCreator", &EmailMessageCreator),
];

/// Runs the demo: the client code once with an SMS creator, once with an
/// E-Mail creator.
///
/// # Output
///
/// ```text
/// App: Launched with the SMSMessageCreator.
/// Client: I'm not aware of the creator's class, but it still works.
/// Creator: The same creator's code has just worked with Message sent by SMS
///
/// App: Launched with the EmailMessageCreator.
/// Client: I'm not aware of the creator's class, but it still works.
/// Creator: The same creator's code has just worked with Message sent by E-Mail
/// ```
///
/// There is no trailing newline after the last line.
pub fn run_demo<W: Write + ?Sized>(out: &mut W) -> Result<(), DemoError> {
    for (i, (name, creator)) in LAUNCHES.iter().enumerate() {
        if i > 0 {
            write!(out, "{}", SEPARATOR)?;
        }
        info!(creator = *name, "Launching");
        writeln!(out, "App: Launched with the {}.", name)?;
        write_client_code(out, *creator)?;
    }

    out.flush()?;
    Ok(())
}

/// Runs the demo on standard output, handing each creator to [`client_code`].
///
/// Produces the same bytes as [`run_demo`].
pub fn launch() -> Result<(), DemoError> {
    let mut out = io::stdout();
    for (i, (name, creator)) in LAUNCHES.iter().enumerate() {
        if i > 0 {
            write!(out, "{}", SEPARATOR)?;
        }
        info!(creator = *name, "Launching");
        writeln!(out, "App: Launched with the {}.", name)?;
        out.flush()?;
        client_code(*creator)?;
    }
    Ok(())
}
