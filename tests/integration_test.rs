use factory_method_recipe::clients::write_client_code;
use factory_method_recipe::creators::{EmailMessageCreator, SmsMessageCreator};
use factory_method_recipe::framework::{MessageCreator, CREATOR_PREFIX};
use factory_method_recipe::lifecycle::run_demo;
use std::process::Command;

const TRANSCRIPT: &str = "App: Launched with the SMSMessageCreator.\n\
Client: I'm not aware of the creator's class, but it still works.\n\
Creator: The same creator's code has just worked with Message sent by SMS\n\
\n\
App: Launched with the EmailMessageCreator.\n\
Client: I'm not aware of the creator's class, but it still works.\n\
Creator: The same creator's code has just worked with Message sent by E-Mail";

/// Every creator's business logic is the prefix followed by its own product's output.
#[test]
fn test_some_operation_wraps_product_output() {
    let creators: [&dyn MessageCreator; 2] = [&SmsMessageCreator, &EmailMessageCreator];
    for creator in creators {
        let expected = format!("{}{}", CREATOR_PREFIX, creator.factory_method().send());
        assert_eq!(creator.some_operation(), expected);
    }
}

/// Fresh instances of the same creator agree with each other on every call.
#[test]
fn test_output_is_deterministic() {
    let first = EmailMessageCreator.some_operation();
    for _ in 0..5 {
        assert_eq!(EmailMessageCreator::default().some_operation(), first);
    }
}

#[test]
fn test_client_scenarios() {
    let mut sms = Vec::new();
    write_client_code(&mut sms, &SmsMessageCreator).expect("Failed to write SMS output");
    assert_eq!(
        String::from_utf8(sms).unwrap(),
        "Client: I'm not aware of the creator's class, but it still works.\n\
         Creator: The same creator's code has just worked with Message sent by SMS"
    );

    let mut email = Vec::new();
    write_client_code(&mut email, &EmailMessageCreator).expect("Failed to write E-Mail output");
    assert_eq!(
        String::from_utf8(email).unwrap(),
        "Client: I'm not aware of the creator's class, but it still works.\n\
         Creator: The same creator's code has just worked with Message sent by E-Mail"
    );
}

#[test]
fn test_demo_transcript() {
    let mut out = Vec::new();
    run_demo(&mut out).expect("Failed to run demo");
    assert_eq!(String::from_utf8(out).unwrap(), TRANSCRIPT);
}

/// Full end-to-end run of the binary, which prints through `client_code`
/// on stdout. Logs must not leak into stdout.
#[test]
fn test_binary_prints_transcript() {
    let output = Command::new(env!("CARGO_BIN_EXE_factory-method-recipe"))
        .env("RUST_LOG", "debug")
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), TRANSCRIPT);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(
        stderr.matches("Printing client output to stdout").count(),
        2,
        "Expected one client_code call per creator in: {}",
        stderr
    );
}
