use leptos::prelude::*;

use crate::core::content::{FAQ_ENTRIES, FaqEntry, HELPLINE};
use crate::core::{Accordion, SectionId};
use crate::ui::icon::{Icon, icons};
use crate::ui::page::use_page_context;

use super::SectionHeader;

/// FAQ accordion; at most one answer is expanded at a time
#[component]
pub fn FaqSection() -> impl IntoView {
    let page = use_page_context();
    let accordion = RwSignal::new(Accordion::<usize>::new());

    view! {
        <section id=SectionId::Faq.as_str() class="py-20 px-4 bg-slate-50">
            <div class="max-w-3xl mx-auto">
                <SectionHeader
                    eyebrow="FAQ"
                    title="Frequently Asked Questions"
                    subtitle="Everything you need to know before moving day."
                />

                <div class="space-y-4">
                    {FAQ_ENTRIES.into_iter().enumerate().map(|(index, entry)| view! {
                        <FaqItem index=index entry=entry accordion=accordion />
                    }).collect_view()}
                </div>

                <div class="mt-12 text-center landing-scroll-animate">
                    <p class="text-slate-600 mb-4">"Still have questions? Call us at " {HELPLINE}</p>
                    <button
                        class="landing-btn-primary"
                        on:click=move |_| page.scroll_to(SectionId::Contact)
                    >
                        "Contact Us"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FaqItem(index: usize, entry: FaqEntry, accordion: RwSignal<Accordion<usize>>) -> impl IntoView {
    let is_open = move || accordion.with(|a| a.is_open(index));
    let panel_id = format!("faq-panel-{}", index);

    view! {
        <div class="landing-scroll-animate bg-white border border-slate-200 rounded-xl overflow-hidden">
            <button
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left hover:bg-slate-50 transition-colors"
                on:click=move |_| accordion.update(|a| a.toggle(index))
                aria-expanded=move || is_open().to_string()
                aria-controls=panel_id.clone()
            >
                <span class="font-semibold text-indigo-950">{entry.question}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", is_open)
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </div>
            </button>
            <div
                id=panel_id
                class="overflow-hidden transition-all duration-300"
                class:max-h-0=move || !is_open()
                class:max-h-96=is_open
            >
                <div class="px-6 pb-4 text-slate-600 leading-relaxed">
                    {entry.answer}
                </div>
            </div>
        </div>
    }
}
