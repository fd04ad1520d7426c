use crate::framework::{Message, MessageCreator};
use crate::model::EmailMessage;

/// Creator for [`EmailMessage`] products.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailMessageCreator;

impl MessageCreator for EmailMessageCreator {
    fn factory_method(&self) -> Box<dyn Message> {
        Box::new(EmailMessage)
    }
}
