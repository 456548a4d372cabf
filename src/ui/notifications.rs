//! Toast notifications
//!
//! Success and error toasts raised by the quote form. Each toast removes
//! itself after its auto-dismiss delay and can be closed by hand.

use leptos::prelude::*;

use crate::core::{Notice, NoticeItem, NoticeKind, NoticeQueue};

/// Delay between the exit animation starting and the toast leaving the queue
#[cfg(not(feature = "ssr"))]
const EXIT_ANIMATION_MS: u32 = 300;

/// Handle to the page-wide toast queue
#[derive(Clone, Copy)]
pub struct NotificationManager {
    queue: RwSignal<NoticeQueue>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::new()),
        }
    }

    /// Signal holding the queue, for the container
    pub fn queue(&self) -> RwSignal<NoticeQueue> {
        self.queue
    }

    /// Queue several notices in order, one toast each
    pub fn notify_all(&self, notices: Vec<Notice>) {
        if notices.is_empty() {
            return;
        }
        self.queue.update(|q| {
            q.extend(notices);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the toast queue and make it available to the component tree
pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

pub fn use_notifications() -> NotificationManager {
    use_context::<NotificationManager>().expect("NotificationManager should be provided")
}

/// Stack of toasts pinned to the top-right corner
#[component]
pub fn NotificationsContainer(manager: NotificationManager) -> impl IntoView {
    let queue = manager.queue();

    view! {
        <div
            class="fixed top-4 right-4 z-[1200] flex flex-col gap-2 w-full max-w-sm"
            role="status"
            aria-live="polite"
        >
            <For
                each=move || queue.with(|q| q.iter().cloned().collect::<Vec<_>>())
                key=|item| item.id
                children=move |item| view! { <NotificationToast item=item manager=manager /> }
            />
        </div>
    }
}

#[component]
fn NotificationToast(item: NoticeItem, manager: NotificationManager) -> impl IntoView {
    let (is_exiting, _set_is_exiting) = signal(false);
    let id = item.id;
    let notice = item.notice;

    if let Some(_ms) = notice.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                _set_is_exiting.set(true);
                TimeoutFuture::new(EXIT_ANIMATION_MS).await;
                manager.dismiss(id);
            });
        }
    }

    let (container_class, icon_path) = match notice.kind {
        NoticeKind::Success => (
            "bg-green-50 border-green-500 text-green-800",
            "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
        NoticeKind::Error => (
            "bg-red-50 border-red-500 text-red-800",
            "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
    };
    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border-l-4 shadow-lg transition-all duration-300 {}",
        container_class
    );

    view! {
        <div
            class=container_class
            style=move || if is_exiting.get() { "opacity: 0; transform: translateY(-0.5rem);" } else { "opacity: 1; transform: translateY(0);" }
        >
            <svg class="w-5 h-5 flex-shrink-0" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
            </svg>
            <p class="flex-1 text-sm font-medium">{notice.message}</p>
            <button
                class="opacity-60 hover:opacity-100 transition-opacity"
                aria-label="Dismiss"
                on:click=move |_| manager.dismiss(id)
            >
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
        </div>
    }
}
