use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::content::{City, CityTier, MAJOR_CITIES, NETWORK_STATS};
use crate::ui::icon::{Icon, icons};

use super::{SectionHeader, StatCard};

#[component]
pub fn NetworkSection() -> impl IntoView {
    view! {
        <section id=SectionId::Network.as_str() class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeader
                    eyebrow="Our Network"
                    title="Pan-India Coverage"
                    subtitle="Branches and partner hubs in every major metro and a growing list of tier 2 and 3 cities."
                />

                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 mb-14">
                    {NETWORK_STATS.into_iter().map(|stat| view! { <StatCard stat=stat /> }).collect_view()}
                </div>

                <h3 class="text-xl font-semibold text-indigo-950 mb-6 text-center">"Major Cities"</h3>
                <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4">
                    {MAJOR_CITIES.into_iter().map(|city| view! { <CityChip city=city /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CityChip(city: City) -> impl IntoView {
    let badge_class = match city.tier {
        CityTier::Metro => "bg-indigo-100 text-indigo-800",
        CityTier::Tier1 => "bg-orange-100 text-orange-800",
        CityTier::Tier2 => "bg-slate-100 text-slate-700",
    };

    view! {
        <div class="landing-scroll-animate flex items-center gap-3 p-4 rounded-xl bg-white border border-slate-100 shadow-sm">
            <Icon name=icons::MAP_PIN class="w-5 h-5 flex-shrink-0" />
            <div class="flex-1 min-w-0">
                <p class="font-semibold text-indigo-950 truncate">{city.name}</p>
                <p class="text-xs text-slate-500 truncate">{city.state}</p>
            </div>
            <span class=format!("px-2 py-0.5 text-xs font-medium rounded-full {}", badge_class)>
                {city.tier.label()}
            </span>
        </div>
    }
}
