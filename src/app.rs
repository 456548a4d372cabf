use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::SiteSettings;
use crate::core::site::{META_LEAD_ENDPOINT, META_PUBLIC_URL};
use crate::ui::lead_client::page_settings;
use crate::ui::{LandingPage, NotFoundPage};

/// Settings provided by the server for this request, or read back from the
/// rendered document after hydration
fn site_settings() -> SiteSettings {
    use_context::<SiteSettings>().unwrap_or_else(page_settings)
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let settings = site_settings();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_LEAD_ENDPOINT content=settings.lead_endpoint/>
                <meta name=META_PUBLIC_URL content=settings.public_url/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(site_settings());

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/carrypack.css"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
}
