use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::content::{ABOUT_FEATURES, ABOUT_STATS, MISSION, VISION};
use crate::ui::icon::{Icon, icons};

use super::{FeatureCard, SectionHeader, StatCard};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=SectionId::About.as_str() class="py-20 px-4 bg-slate-50">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    eyebrow="About Us"
                    title="Your Trusted Moving Partner"
                    subtitle="Over a decade of relocating homes and businesses across India with care, \
                              transparency and on-time delivery."
                />

                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-16">
                    {ABOUT_STATS.into_iter().map(|stat| view! { <StatCard stat=stat /> }).collect_view()}
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6 mb-16">
                    {ABOUT_FEATURES.into_iter().map(|feature| view! { <FeatureCard feature=feature /> }).collect_view()}
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    <StatementCard icon=icons::TARGET title="Our Mission" body=MISSION />
                    <StatementCard icon=icons::EYE title="Our Vision" body=VISION />
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatementCard(icon: &'static str, title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="landing-scroll-animate p-8 rounded-2xl bg-gradient-to-br from-indigo-900 to-indigo-700 text-white shadow-lg">
            <div class="flex items-center gap-3 mb-4">
                <Icon name=icon class="w-7 h-7 invert" />
                <h3 class="text-2xl font-bold">{title}</h3>
            </div>
            <p class="text-indigo-100 leading-relaxed">{body}</p>
        </div>
    }
}
