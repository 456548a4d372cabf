//! Landing page sections, in page order

mod about;
mod contact;
mod faq;
mod footer;
mod hero;
mod industries;
mod network;
mod services;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use faq::FaqSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use industries::IndustriesSection;
pub use network::NetworkSection;
pub use services::ServicesSection;

use leptos::prelude::*;

use crate::core::content::{Feature, Stat};
use crate::ui::icon::Icon;

/// Centered eyebrow, title and lead paragraph opening a section
#[component]
fn SectionHeader(
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)]
    subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-14 landing-scroll-animate">
            <span class="inline-block px-3 py-1 mb-3 text-xs font-semibold tracking-wider uppercase rounded-full bg-orange-100 text-orange-700">
                {eyebrow}
            </span>
            <h2 class="text-3xl sm:text-4xl font-bold text-indigo-950 mb-4">{title}</h2>
            {subtitle.map(|text| view! {
                <p class="text-lg text-slate-600 max-w-2xl mx-auto">{text}</p>
            })}
        </div>
    }
}

#[component]
fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <div class="landing-scroll-animate flex flex-col items-center p-6 rounded-xl bg-white shadow-sm border border-slate-100">
            <Icon name=stat.icon class="w-8 h-8 mb-3" />
            <span class="text-3xl font-bold text-indigo-900">{stat.value}</span>
            <span class="text-sm text-slate-500 mt-1">{stat.label}</span>
        </div>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="landing-scroll-animate bg-white p-6 rounded-xl border border-slate-100 hover:border-orange-300
                    transition-all duration-300 hover:shadow-lg hover:-translate-y-1">
            <div class="w-12 h-12 rounded-lg bg-indigo-50 flex items-center justify-center mb-4">
                <Icon name=feature.icon class="w-6 h-6" />
            </div>
            <h3 class="text-lg font-semibold text-indigo-950 mb-2">{feature.title}</h3>
            <p class="text-slate-600 text-sm leading-relaxed">{feature.description}</p>
        </div>
    }
}
