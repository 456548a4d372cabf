use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::content::{
    COMPANY_NAME, FOOTER_SERVICES, HELPLINE, SOCIAL_LINKS, TAGLINE, TRUST_BADGES,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::page::use_page_context;

#[component]
pub fn Footer() -> impl IntoView {
    let page = use_page_context();
    let year = Utc::now().year();

    view! {
        <footer class="pt-16 pb-8 bg-indigo-950 text-indigo-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-10 mb-12">
                    // Brand
                    <div class="md:col-span-2">
                        <button
                            class="flex items-center gap-3 mb-4"
                            on:click=move |_| page.scroll_to(SectionId::Home)
                        >
                            <div class="w-10 h-10 rounded-xl bg-orange-500 flex items-center justify-center">
                                <Icon name=icons::TRUCK class="w-6 h-6 invert" />
                            </div>
                            <span class="text-xl font-bold text-white">{COMPANY_NAME}</span>
                        </button>
                        <p class="text-sm text-indigo-200 max-w-md mb-6">{TAGLINE}</p>
                        <div class="flex flex-wrap gap-3">
                            {TRUST_BADGES.into_iter().map(|badge| view! {
                                <span class="inline-flex items-center gap-1.5 px-3 py-1 rounded-full bg-white/10 text-xs font-medium">
                                    <Icon name=badge.icon class="w-4 h-4 invert" />
                                    {badge.title}
                                </span>
                            }).collect_view()}
                        </div>
                    </div>

                    // Services
                    <div>
                        <h4 class="font-semibold text-white mb-4">"Our Services"</h4>
                        <ul class="space-y-2">
                            {FOOTER_SERVICES.into_iter().map(|name| view! {
                                <li>
                                    <button
                                        class="text-sm text-indigo-200 hover:text-orange-400 transition-colors"
                                        on:click=move |_| page.scroll_to(SectionId::Services)
                                    >
                                        {name}
                                    </button>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    // Contact
                    <div>
                        <h4 class="font-semibold text-white mb-4">"Get in Touch"</h4>
                        <a
                            href=format!("tel:{}", HELPLINE.replace(' ', ""))
                            class="flex items-center gap-2 text-sm text-indigo-200 hover:text-orange-400 transition-colors mb-6"
                        >
                            <Icon name=icons::PHONE class="w-4 h-4 invert" />
                            {HELPLINE}
                        </a>
                        <div class="flex items-center gap-3">
                            {SOCIAL_LINKS.into_iter().map(|link| view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="w-9 h-9 rounded-full bg-white/10 hover:bg-orange-500 flex items-center justify-center transition-colors"
                                    aria-label=link.label
                                >
                                    <Icon name=link.icon class="w-4 h-4 invert" />
                                </a>
                            }).collect_view()}
                        </div>
                    </div>
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-white/10 flex flex-col sm:flex-row items-center justify-between gap-4 text-sm text-indigo-300">
                    <span>{format!("© {} {}. All rights reserved.", year, COMPANY_NAME)}</span>
                    <div class="flex items-center gap-6">
                        <a href="/privacy" class="hover:text-white transition-colors">"Privacy"</a>
                        <a href="/terms" class="hover:text-white transition-colors">"Terms"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
