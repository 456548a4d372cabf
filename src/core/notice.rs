//! Transient notifications ("toasts")
//!
//! Every notice is tagged success or error, auto-dismisses after
//! [`AUTO_DISMISS_MS`] and can be dismissed manually.

use std::collections::VecDeque;

/// How long a notice stays on screen
pub const AUTO_DISMISS_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A notice waiting to be shown
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            auto_dismiss_ms: Some(AUTO_DISMISS_MS),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            auto_dismiss_ms: Some(AUTO_DISMISS_MS),
        }
    }
}

/// Notice with a unique ID for tracking
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeItem {
    pub id: u64,
    pub notice: Notice,
}

/// Ordered queue of visible notices, oldest first
#[derive(Clone, Debug, Default)]
pub struct NoticeQueue {
    items: VecDeque<NoticeItem>,
    next_id: u64,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a notice and return its ID
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back(NoticeItem { id, notice });
        id
    }

    pub fn extend(&mut self, notices: impl IntoIterator<Item = Notice>) -> Vec<u64> {
        notices.into_iter().map(|n| self.push(n)).collect()
    }

    /// Remove a notice. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NoticeItem> {
        self.items.iter()
    }
}
