//! In-Memory Transport for Testing
//!
//! Scripted inbound frames, captured outbound frames. Implements the
//! same Stream + Sink surface the session loop sees on a real
//! WebSocket connection.

use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::{Sink, Stream};
use tokio_tungstenite::tungstenite::{Error as WsError, Message};

pub struct MockTransport {
    inbound: VecDeque<Result<Message, WsError>>,
    pub sent: Vec<Message>,
    pub closed: bool,
}

impl MockTransport {
    pub fn new(inbound: Vec<Result<Message, WsError>>) -> Self {
        Self {
            inbound: inbound.into_iter().collect(),
            sent: Vec::new(),
            closed: false,
        }
    }

    /// Text payloads written by the session, in order
    pub fn sent_text(&self) -> Vec<String> {
        self.sent
            .iter()
            .filter_map(|message| match message {
                Message::Text(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Stream for MockTransport {
    type Item = Result<Message, WsError>;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.inbound.pop_front())
    }
}

impl Sink<Message> for MockTransport {
    type Error = WsError;

    fn poll_ready(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), WsError>> {
        Poll::Ready(Ok(()))
    }

    fn start_send(mut self: Pin<&mut Self>, item: Message) -> Result<(), WsError> {
        self.sent.push(item);
        Ok(())
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), WsError>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), WsError>> {
        self.closed = true;
        Poll::Ready(Ok(()))
    }
}
