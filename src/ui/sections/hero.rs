use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::content::{COMPANY_NAME, HERO_STATS, TAGLINE};
use crate::ui::icon::{Icon, icons};
use crate::ui::page::use_page_context;

use super::StatCard;

#[component]
pub fn HeroSection() -> impl IntoView {
    let page = use_page_context();

    view! {
        <section id=SectionId::Home.as_str() class="min-h-screen flex items-center justify-center relative pt-16 overflow-hidden">
            <div class="text-center px-4 max-w-5xl mx-auto">
                <h1 class="text-5xl sm:text-6xl lg:text-7xl font-extrabold text-indigo-950 mb-4 tracking-tight landing-fade-in-up">
                    {COMPANY_NAME}
                </h1>
                <p class="text-2xl sm:text-3xl font-semibold text-orange-600 mb-6 landing-fade-in-up landing-delay-200">
                    {TAGLINE}
                </p>
                <p class="text-lg sm:text-xl text-slate-600 max-w-2xl mx-auto mb-10 leading-relaxed landing-fade-in-up landing-delay-200">
                    "Reliable, Efficient, and Stress-Free Moving Solutions Across India. \
                     Experience seamless relocation with our expert team."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-16 landing-fade-in-up landing-delay-400">
                    <button
                        class="landing-btn-primary inline-flex items-center gap-2"
                        on:click=move |_| page.scroll_to(SectionId::Contact)
                    >
                        "Get Free Quote"
                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                    </button>
                    <button
                        class="landing-btn-secondary"
                        on:click=move |_| page.scroll_to(SectionId::Services)
                    >
                        "Our Services"
                    </button>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {HERO_STATS.into_iter().map(|stat| view! { <StatCard stat=stat /> }).collect_view()}
                </div>
            </div>

            <button
                class="absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center text-indigo-900"
                on:click=move |_| page.scroll_to(SectionId::Services)
                aria-label="Scroll to services"
            >
                <span class="text-xs mb-1">"Scroll to explore"</span>
                <Icon name=icons::CHEVRON_DOWN class="w-6 h-6 animate-bounce" />
            </button>

            <div class="absolute inset-0 -z-10" aria-hidden="true">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-indigo-500/5 rounded-full blur-3xl"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-orange-500/5 rounded-full blur-3xl"></div>
            </div>
        </section>
    }
}
