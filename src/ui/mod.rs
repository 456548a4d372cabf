pub mod chat_widget;
pub mod common;
pub mod icon;
pub mod lead_client;
pub mod navigation;
pub mod notifications;
pub mod page;
pub mod pages;
pub mod sections;

pub use chat_widget::ChatWidget;
pub use icon::{Icon, icons};
pub use notifications::{NotificationManager, NotificationsContainer};
pub use page::{PageContext, provide_page_context, use_page_context};
pub use pages::{LandingPage, NotFoundPage};
