//! Line-oriented transports carrying wire messages between peers.

use crate::protocol::Message;

/// A bidirectional, ordered stream of text lines.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send one line; the transport appends the line terminator.
    async fn send_line(&mut self, line: &str) -> anyhow::Result<()>;

    /// Block until one full line arrives, returned without its terminator.
    async fn recv_line(&mut self) -> anyhow::Result<String>;

    /// Encode and send a message.
    async fn send(&mut self, msg: &Message) -> anyhow::Result<()> {
        self.send_line(&msg.encode()).await
    }
}

pub mod in_memory;
pub mod tcp;
