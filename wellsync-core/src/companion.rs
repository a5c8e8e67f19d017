//! Companion chat transcript.
//!
//! The companion does not understand anything; it answers each message
//! with one of a handful of supportive lines.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const GREETING: &str = "Hello! I'm your WellSync companion. How are you feeling today?";

pub const COMPANION_REPLIES: [&str; 5] = [
    "That's great to hear! Remember to take care of yourself.",
    "I'm here to listen. What's on your mind?",
    "It's important to acknowledge your feelings. How can I help?",
    "Thank you for sharing. Let's work through this together.",
    "You're doing great by reaching out. What would help you feel better?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

/// Pick a companion reply uniformly at random.
pub fn pick_reply<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    COMPANION_REPLIES
        .choose(rng)
        .copied()
        .unwrap_or(COMPANION_REPLIES[0])
}

/// Chat transcript, starting with the companion's greeting.
#[derive(Debug, Clone)]
pub struct Companion {
    messages: Vec<ChatMessage>,
}

impl Default for Companion {
    fn default() -> Self {
        Self::new()
    }
}

impl Companion {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(GREETING, Sender::Ai)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Record a user message. Blank messages are dropped and return `None`.
    pub fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(text, Sender::User));
        self.messages.last()
    }

    /// Record a reply from the companion.
    pub fn push_reply(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.messages.push(ChatMessage::new(text, Sender::Ai));
        &self.messages[self.messages.len() - 1]
    }

    /// Choose and record a reply.
    pub fn reply<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &ChatMessage {
        let text = pick_reply(rng);
        self.push_reply(text)
    }
}
