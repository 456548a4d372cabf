//! Page-level scroll state
//!
//! Provides:
//! - `PageContext` with the active section, the scrolled flag and reading progress
//! - Smooth-scroll navigation to a section
//! - A passive window scroll listener keeping all three in sync

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use crate::core::section::{is_scrolled, scroll_progress};
use crate::core::{ScrollSpy, SectionId};

/// Scroll state shared by the navigation controls and the hero buttons
#[derive(Clone, Copy)]
pub struct PageContext {
    spy: RwSignal<ScrollSpy>,
    /// Page is scrolled past the fold
    pub scrolled: RwSignal<bool>,
    /// Reading progress, 0 to 100
    pub progress: RwSignal<f64>,
}

impl PageContext {
    fn new() -> Self {
        Self {
            spy: RwSignal::new(ScrollSpy::new()),
            scrolled: RwSignal::new(false),
            progress: RwSignal::new(0.0),
        }
    }

    /// Currently active section (tracked)
    pub fn active(&self) -> SectionId {
        self.spy.with(|spy| spy.active())
    }

    pub fn is_active(&self, id: SectionId) -> bool {
        self.active() == id
    }

    /// Smooth-scroll to a section and mark it active right away.
    /// Does nothing when the section is not on the page.
    pub fn scroll_to(&self, id: SectionId) {
        #[cfg(not(feature = "ssr"))]
        {
            let mut spy = self.spy.get_untracked();
            if let Some(top) = spy.navigate(id, dom::page_offset(), dom::section_bounds) {
                self.spy.set(spy);
                dom::smooth_scroll(top);
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = id;
        }
    }

    /// Re-read the scroll position; called from the scroll listener
    #[cfg(not(feature = "ssr"))]
    fn refresh(&self) {
        let offset = dom::page_offset();

        let mut spy = self.spy.get_untracked();
        let before = spy.active();
        if spy.observe(dom::section_bounds) != before {
            self.spy.set(spy);
        }

        let scrolled = is_scrolled(offset);
        if self.scrolled.get_untracked() != scrolled {
            self.scrolled.set(scrolled);
        }

        self.progress.set(scroll_progress(
            offset,
            dom::document_height(),
            dom::viewport_height(),
        ));
    }
}

#[cfg(not(feature = "ssr"))]
mod dom {
    use leptos::web_sys;

    use crate::core::{SectionBounds, SectionId};

    /// Viewport-relative bounds of a section element
    pub fn section_bounds(id: SectionId) -> Option<SectionBounds> {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(id.as_str())?;
        let rect = element.get_bounding_client_rect();
        Some(SectionBounds::new(rect.top(), rect.bottom()))
    }

    pub fn page_offset() -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    pub fn document_height() -> f64 {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0)
    }

    pub fn viewport_height() -> f64 {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    pub fn smooth_scroll(top: f64) {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Create the page context, install the scroll listener and provide it
pub fn provide_page_context() -> PageContext {
    let ctx = PageContext::new();

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::logging::warn;
        use leptos::web_sys;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };

            let handler = Closure::<dyn Fn()>::new(move || ctx.refresh());
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(true);

            if window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "scroll",
                    handler.as_ref().unchecked_ref(),
                    &options,
                )
                .is_err()
            {
                warn!("failed to install scroll listener");
            }

            // Keep the closure alive
            handler.forget();

            // Sync with wherever the browser restored the scroll position
            ctx.refresh();
        });
    }

    provide_context(ctx);

    ctx
}

pub fn use_page_context() -> PageContext {
    use_context::<PageContext>().expect("PageContext should be provided")
}
