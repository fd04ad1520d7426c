//! # Mock Framework
//!
//! Utilities for testing code that depends on [`MessageCreator`] without
//! reaching for a concrete creator.
//!
//! [`MockCreator`] hands out [`MockMessage`] products that all report back to the
//! same shared counters, so a test can assert how often the factory method and
//! `send` were called.

use crate::framework::{Message, MessageCreator};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Calls {
    factory_method: AtomicUsize,
    send: AtomicUsize,
}

/// A mock creator with call tracking for fluent testing.
///
/// # Example
/// ```
/// use factory_method_recipe::framework::MessageCreator;
/// use factory_method_recipe::framework::mock::MockCreator;
///
/// let mut mock = MockCreator::new("Message sent by mock");
/// mock.expect_factory_method(1).expect_send(1);
///
/// let _ = mock.some_operation();
/// mock.verify(); // Ensures all expectations were met
/// ```
#[derive(Debug, Clone)]
pub struct MockCreator {
    reply: String,
    calls: Arc<Calls>,
    expected_factory_calls: Option<usize>,
    expected_send_calls: Option<usize>,
}

impl MockCreator {
    /// Creates a new mock whose products answer `send` with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: Arc::new(Calls::default()),
            expected_factory_calls: None,
            expected_send_calls: None,
        }
    }

    /// Expects `factory_method` to be called exactly `times` times.
    pub fn expect_factory_method(&mut self, times: usize) -> &mut Self {
        self.expected_factory_calls = Some(times);
        self
    }

    /// Expects `send` to be called exactly `times` times across all products.
    pub fn expect_send(&mut self, times: usize) -> &mut Self {
        self.expected_send_calls = Some(times);
        self
    }

    /// Number of times `factory_method` has been called.
    pub fn factory_method_calls(&self) -> usize {
        self.calls.factory_method.load(Ordering::SeqCst)
    }

    /// Number of times `send` has been called on any product from this mock.
    pub fn send_calls(&self) -> usize {
        self.calls.send.load(Ordering::SeqCst)
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        if let Some(expected) = self.expected_factory_calls {
            let actual = self.factory_method_calls();
            if actual != expected {
                panic!("factory_method called {} times, expected {}", actual, expected);
            }
        }
        if let Some(expected) = self.expected_send_calls {
            let actual = self.send_calls();
            if actual != expected {
                panic!("send called {} times, expected {}", actual, expected);
            }
        }
    }
}

impl MessageCreator for MockCreator {
    fn factory_method(&self) -> Box<dyn Message> {
        self.calls.factory_method.fetch_add(1, Ordering::SeqCst);
        Box::new(MockMessage {
            reply: self.reply.clone(),
            calls: self.calls.clone(),
        })
    }
}

/// Product built by [`MockCreator`].
#[derive(Debug)]
pub struct MockMessage {
    reply: String,
    calls: Arc<Calls>,
}

impl Message for MockMessage {
    fn send(&self) -> String {
        self.calls.send.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}
