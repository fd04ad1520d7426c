use crate::framework::{Message, MessageCreator};
use crate::model::SmsMessage;

/// Creator for [`SmsMessage`] products.
///
/// The signature of [`factory_method`](MessageCreator::factory_method) still uses
/// the abstract product type even though an `SmsMessage` is returned. This keeps
/// the shared creator logic independent of concrete product types.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmsMessageCreator;

impl MessageCreator for SmsMessageCreator {
    fn factory_method(&self) -> Box<dyn Message> {
        Box::new(SmsMessage)
    }
}
