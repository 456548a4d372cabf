use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::content::{SERVICES, Service};
use crate::ui::icon::{Icon, icons};

use super::SectionHeader;

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id=SectionId::Services.as_str() class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    eyebrow="Our Services"
                    title="Complete Moving Solutions"
                    subtitle="From a single room to a full office, we pack, move and deliver with care."
                />
                <div class="grid md:grid-cols-2 gap-8">
                    {SERVICES.into_iter().map(|service| view! { <ServiceCard service=service /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    view! {
        <article class="landing-scroll-animate flex flex-col p-8 rounded-2xl bg-white border border-slate-100 shadow-sm
                        hover:shadow-xl hover:-translate-y-1 transition-all duration-300">
            <div class="w-14 h-14 rounded-xl bg-orange-50 flex items-center justify-center mb-5">
                <Icon name=service.icon class="w-7 h-7" />
            </div>
            <h3 class="text-xl font-bold text-indigo-950 mb-3">{service.title}</h3>
            <p class="text-slate-600 leading-relaxed mb-5">{service.description}</p>
            <ul class="space-y-2 mt-auto">
                {service.highlights.into_iter().map(|item| view! {
                    <li class="flex items-center gap-2 text-sm text-slate-700">
                        <Icon name=icons::CHECK class="w-4 h-4" />
                        {item}
                    </li>
                }).collect_view()}
            </ul>
        </article>
    }
}
