//! Rendezvous channel between the output reader and the answer writer.
//!
//! ```text
//!   Publisher ──▶ [one slot] ──▶ Subscriber
//!   ├── publish() returns once the Token it sent is dropped
//!   ├── drop Publisher → recv() returns None
//!   └── drop Subscriber → publish() returns Err(Closed)
//! ```
//!
//! A token is only released back to the publisher after the subscriber has
//! finished with it, so the reader never issues its next read while the
//! previous token is still being matched and answered.

use std::ops::Deref;
use tokio::sync::{mpsc, oneshot};

/// The receiving side went away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Closed;

type Slot = (String, oneshot::Sender<()>);

/// Create a connected publisher/subscriber pair.
pub fn handoff() -> (Publisher, Subscriber) {
    let (tx, rx) = mpsc::channel(1);
    (Publisher { tx }, Subscriber { rx })
}

/// Producing half.
#[derive(Debug)]
pub struct Publisher {
    tx: mpsc::Sender<Slot>,
}

impl Publisher {
    /// Hand `text` to the subscriber and wait until it is done with it.
    pub async fn publish(&self, text: String) -> Result<(), Closed> {
        let (done_tx, done_rx) = oneshot::channel();
        self.tx.send((text, done_tx)).await.map_err(|_| Closed)?;
        done_rx.await.map_err(|_| Closed)
    }
}

/// Consuming half.
#[derive(Debug)]
pub struct Subscriber {
    rx: mpsc::Receiver<Slot>,
}

impl Subscriber {
    /// Wait for the next token. `None` once the publisher is dropped.
    pub async fn recv(&mut self) -> Option<Token> {
        let (text, done) = self.rx.recv().await?;
        Some(Token {
            text,
            done: Some(done),
        })
    }
}

/// A published chunk of text. Dropping it releases the publisher.
#[derive(Debug)]
pub struct Token {
    text: String,
    done: Option<oneshot::Sender<()>>,
}

impl Deref for Token {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl Drop for Token {
    fn drop(&mut self) {
        if let Some(done) = self.done.take() {
            let _ = done.send(());
        }
    }
}
