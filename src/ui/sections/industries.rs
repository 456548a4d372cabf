use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::content::INDUSTRIES;

use super::{FeatureCard, SectionHeader};

#[component]
pub fn IndustriesSection() -> impl IntoView {
    view! {
        <section id=SectionId::Industries.as_str() class="py-20 px-4 bg-slate-50">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    eyebrow="Industries"
                    title="Industries We Serve"
                    subtitle="Specialised handling for every kind of cargo, from living rooms to factory floors."
                />
                <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {INDUSTRIES.into_iter().map(|feature| view! { <FeatureCard feature=feature /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
