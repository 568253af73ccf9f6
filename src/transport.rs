//! Outbound message transport contract.
//!
//! Delivery is fire-and-forget: the greeter hands a composed message to the
//! router and never learns whether it arrived. Routing to a closed or
//! unknown destination must not disturb the caller.

use tokio::sync::mpsc;

/// A composed greeting message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub body: String,
}

/// Routes messages toward their destination session.
pub trait MessageRouter: Send + Sync {
    /// Hand off a message for delivery. No return value is consulted.
    fn route(&self, message: Message);
}

/// Router that forwards messages onto a channel for the host to drain.
pub struct ChannelRouter {
    tx: mpsc::UnboundedSender<Message>,
}

impl ChannelRouter {
    /// Create a router and the receiving end the host delivers from.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Message>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl MessageRouter for ChannelRouter {
    fn route(&self, message: Message) {
        // Receiver gone means the host is shutting down; drop the message.
        let _ = self.tx.send(message);
    }
}
