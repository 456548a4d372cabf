//! Scripted moving assistant
//!
//! A local-only chat simulation: the user's text is echoed into the
//! transcript and, after a short delay, one of a fixed set of canned
//! replies is appended. Nothing is sent over the network.

use chrono::{DateTime, Utc};

/// Delay before the assistant "answers"
pub const REPLY_DELAY_MS: u32 = 1000;

pub const GREETING: &str = "Hello! I'm your moving assistant. How can I help you today?";

/// Replies the assistant picks from
pub const CANNED_REPLIES: [&str; 4] = [
    "I can help you with that. Our team will contact you shortly with a detailed quote.",
    "Thanks for your query. Would you like a free moving quote? You can also call us directly at +91 98765 43210",
    "For immediate assistance, please call our helpline: +91 98765 43210. We're available 24/7!",
    "We offer complete packing, moving, loading, and storage services across all major cities in India.",
];

/// Suggestions offered as chips under the transcript
pub const QUICK_REPLIES: [&str; 4] = [
    "Get a moving quote",
    "What are your service charges?",
    "Do you provide packing materials?",
    "How long does packing take?",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Map a uniform roll in `[0, 1)` onto a canned reply. Out-of-range rolls
/// are clamped so any `f64` picks something.
pub fn pick_reply(roll: f64) -> &'static str {
    let last = CANNED_REPLIES.len() - 1;
    let index = if roll.is_nan() {
        0
    } else {
        // Truncation is the intent: floor(roll * len)
        ((roll.clamp(0.0, 1.0) * CANNED_REPLIES.len() as f64) as usize).min(last)
    };
    CANNED_REPLIES[index]
}

/// Transcript plus the widget's open state and unread badge
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    next_id: u64,
    open: bool,
    unread: u32,
}

impl ChatSession {
    /// New session holding only the greeting
    pub fn new(now: DateTime<Utc>) -> Self {
        let mut session = Self {
            messages: Vec::new(),
            next_id: 1,
            open: false,
            unread: 0,
        };
        session.append(ChatRole::Assistant, GREETING.to_string(), now);
        session
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn unread(&self) -> u32 {
        self.unread
    }

    /// Flip the widget open/closed. Opening clears the unread badge.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.unread = 0;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Append the user's message. Blank input is ignored and returns `None`;
    /// otherwise a reply should be scheduled after [`REPLY_DELAY_MS`].
    pub fn send(&mut self, text: &str, now: DateTime<Utc>) -> Option<u64> {
        if text.trim().is_empty() {
            return None;
        }
        Some(self.append(ChatRole::User, text.to_string(), now))
    }

    /// Append a canned assistant reply chosen by `roll`
    pub fn reply(&mut self, roll: f64, now: DateTime<Utc>) -> u64 {
        let id = self.append(ChatRole::Assistant, pick_reply(roll).to_string(), now);
        if !self.open {
            self.unread += 1;
        }
        id
    }

    fn append(&mut self, role: ChatRole, text: String, timestamp: DateTime<Utc>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            text,
            timestamp,
        });
        id
    }
}
