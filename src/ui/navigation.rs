//! Fixed navigation chrome: reading progress bar, floating logo, side dots
//! and the active-section badge

use leptos::prelude::*;

use crate::core::SectionId;
use crate::ui::icon::{Icon, icons};
use crate::ui::page::use_page_context;

fn section_icon(id: SectionId) -> &'static str {
    match id {
        SectionId::Home => icons::HOME,
        SectionId::About => icons::INFO,
        SectionId::Services => icons::SERVICES,
        SectionId::Industries => icons::BUILDING,
        SectionId::Network => icons::GLOBE,
        SectionId::Faq => icons::HELP_CIRCLE,
        SectionId::Contact => icons::MAIL,
    }
}

/// Thin bar along the top edge showing how far the page is scrolled
#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let page = use_page_context();

    view! {
        <div class="fixed top-0 left-0 right-0 h-[3px] z-[1100]" aria-hidden="true">
            <div
                class="h-full bg-gradient-to-r from-indigo-900 to-orange-500 transition-[width] duration-100"
                style:width=move || format!("{}%", page.progress.get())
            ></div>
        </div>
    }
}

#[component]
pub fn SideNavigation() -> impl IntoView {
    let page = use_page_context();

    view! {
        // Logo, shown once the page is scrolled; jumps back to the top
        <button
            class="fixed top-4 right-4 md:right-5 z-[1000] p-3 md:p-4 rounded-xl bg-white/90 backdrop-blur shadow-lg
                   transition-all duration-300 hover:scale-105"
            class:opacity-0=move || !page.scrolled.get()
            class:pointer-events-none=move || !page.scrolled.get()
            on:click=move |_| page.scroll_to(SectionId::Home)
            aria-label="Back to top"
        >
            <Icon name=icons::TRUCK class="w-6 h-6 md:w-7 md:h-7" />
        </button>

        // Active section badge
        <div
            class="fixed top-[70px] md:top-[90px] right-3 md:right-5 z-[1000] px-3 py-1 rounded-xl bg-white/90 backdrop-blur shadow-lg
                   text-xs font-bold uppercase tracking-wide text-indigo-900 transition-opacity duration-300"
            class:opacity-0=move || !page.scrolled.get()
            aria-hidden="true"
        >
            {move || page.active().as_str()}
        </div>

        // Section dots
        <nav
            class="fixed right-3 md:right-5 top-1/2 -translate-y-1/2 z-[999] flex flex-col items-center gap-1 md:gap-2"
            aria-label="Sections"
        >
            {SectionId::ALL.into_iter().map(|id| view! {
                <button
                    class="group relative w-9 h-9 md:w-10 md:h-10 rounded-full flex items-center justify-center border-2
                           transition-all duration-300 hover:scale-110"
                    class=("bg-indigo-900", move || page.is_active(id))
                    class=("border-indigo-900", move || page.is_active(id))
                    class=("bg-indigo-900/10", move || !page.is_active(id))
                    class=("border-transparent", move || !page.is_active(id))
                    on:click=move |_| page.scroll_to(id)
                    aria-label=id.label()
                    aria-current=move || page.is_active(id).then_some("true")
                >
                    <Icon name=section_icon(id) class="w-4 h-4 md:w-5 md:h-5" />
                    <span class="absolute right-12 px-2 py-0.5 rounded bg-white shadow text-xs font-semibold text-indigo-900
                                 whitespace-nowrap opacity-0 group-hover:opacity-100 transition-opacity pointer-events-none">
                        {id.label()}
                    </span>
                </button>
            }).collect_view()}
        </nav>
    }
}
