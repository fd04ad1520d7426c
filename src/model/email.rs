use crate::framework::Message;

/// A message delivered by e-mail.
///
/// Built by [`EmailMessageCreator`](crate::creators::EmailMessageCreator).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmailMessage;

impl Message for EmailMessage {
    fn send(&self) -> String {
        "Message sent by E-Mail".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send() {
        assert_eq!(EmailMessage.send(), "Message sent by E-Mail");
    }
}
