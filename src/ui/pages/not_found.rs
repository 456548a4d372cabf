use chrono::{Datelike, Utc};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::content::COMPANY_NAME;
use crate::ui::icon::{Icon, icons};

/// 404 page for any path other than `/`
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text=format!("Page Not Found | {}", COMPANY_NAME) />

        <div class="min-h-screen bg-slate-50 flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-indigo-100 rounded-full flex items-center justify-center">
                    <Icon name=icons::TRUCK class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-bold text-indigo-950 mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-indigo-950 mb-2">"Page Not Found"</h2>
                <p class="text-slate-600 mb-8 max-w-md mx-auto">
                    "Looks like this page moved without leaving a forwarding address."
                </p>

                <A href="/" attr:class="landing-btn-primary">
                    "Back to Home"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-slate-500">
                    {format!("© {} {}", Utc::now().year(), COMPANY_NAME)}
                </p>
            </div>
        </div>
    }
}
