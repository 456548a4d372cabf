//! Domain models and page logic for the CarryPack site

pub mod accordion;
pub mod chat;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod lead;
pub mod notice;
pub mod section;
pub mod site;
pub mod submission;
#[cfg(test)]
mod tests;

pub use accordion::Accordion;
pub use chat::{ChatMessage, ChatRole, ChatSession};
pub use lead::{FieldError, FieldErrors, LeadField, LeadRequest};
pub use notice::{Notice, NoticeItem, NoticeKind, NoticeQueue};
pub use section::{ScrollSpy, SectionBounds, SectionId};
pub use site::SiteSettings;
pub use submission::{
    LeadForm, LeadTransport, SubmitOutcome, SubmitStart, TransportError, TransportResponse,
};
