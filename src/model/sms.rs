use crate::framework::Message;

/// A message delivered over SMS.
///
/// # Factory Method
/// This struct implements the [`Message`] trait and is only ever handed to
/// client code as `Box<dyn Message>` by
/// [`SmsMessageCreator`](crate::creators::SmsMessageCreator).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmsMessage;

impl Message for SmsMessage {
    fn send(&self) -> String {
        "Message sent by SMS".to_string()
    }
}
