use crate::framework::{short_type_name, MessageCreator};
use crate::error::DemoError;
use std::io::{self, Write};
use tracing::{debug, instrument};

/// Line the client writes before the creator's result.
pub const CLIENT_PREAMBLE: &str = "Client: I'm not aware of the creator's class, but it still works.\n";

/// Runs the creator's business logic and writes the result to `out`.
///
/// The client works with any creator through the base trait. Nothing here
/// depends on which concrete creator was passed in, so `&dyn MessageCreator`
/// works just as well as a concrete type. No trailing newline is written.
#[instrument(skip_all, fields(creator = short_type_name::<C>()))]
pub fn write_client_code<W, C>(out: &mut W, creator: &C) -> Result<(), DemoError>
where
    W: Write + ?Sized,
    C: MessageCreator + ?Sized,
{
    let result = creator.some_operation();
    debug!(%result, "Writing client output");
    write!(out, "{}{}", CLIENT_PREAMBLE, result)?;
    Ok(())
}

/// Same as [`write_client_code`], printing to standard output.
pub fn client_code<C: MessageCreator + ?Sized>(creator: &C) -> Result<(), DemoError> {
    debug!("Printing client output to stdout");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_client_code(&mut out, creator)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creators::{EmailMessageCreator, SmsMessageCreator};
    use crate::framework::mock::MockCreator;

    fn capture<C: MessageCreator + ?Sized>(creator: &C) -> String {
        let mut buf = Vec::new();
        write_client_code(&mut buf, creator).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_sms_scenario() {
        assert_eq!(
            capture(&SmsMessageCreator),
            "Client: I'm not aware of the creator's class, but it still works.\n\
             Creator: The same creator's code has just worked with Message sent by SMS"
        );
    }

    #[test]
    fn test_email_scenario() {
        assert_eq!(
            capture(&EmailMessageCreator),
            "Client: I'm not aware of the creator's class, but it still works.\n\
             Creator: The same creator's code has just worked with Message sent by E-Mail"
        );
    }

    #[test]
    fn test_accepts_trait_objects() {
        let creators: Vec<Box<dyn MessageCreator>> =
            vec![Box::new(SmsMessageCreator), Box::new(EmailMessageCreator)];
        for creator in &creators {
            let output = capture(&**creator);
            assert!(output.starts_with(CLIENT_PREAMBLE));
            assert!(output.ends_with(&creator.factory_method().send()));
        }
    }

    #[test]
    fn test_runs_business_logic_once() {
        let mut mock = MockCreator::new("Message sent by mock");
        mock.expect_factory_method(1).expect_send(1);

        let output = capture(&mock);
        assert!(output.ends_with("Message sent by mock"));
        mock.verify();
    }
}
