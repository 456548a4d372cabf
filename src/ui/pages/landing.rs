//! Landing page
//!
//! The whole site on one scrolling page:
//! - SEO meta tags built from the configured public URL
//! - Navigation chrome (progress bar, side dots, floating logo)
//! - Hero, About, Services, Industries, Network, FAQ and Contact sections
//! - Footer and the floating chat widget

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::SiteSettings;
use crate::core::content::{COMPANY_NAME, TAGLINE};
use crate::ui::chat_widget::ChatWidget;
use crate::ui::navigation::{ScrollProgressBar, SideNavigation};
use crate::ui::notifications::{NotificationsContainer, provide_notifications};
use crate::ui::page::provide_page_context;
use crate::ui::sections::{
    AboutSection, ContactSection, FaqSection, Footer, HeroSection, IndustriesSection,
    NetworkSection, ServicesSection,
};

const DESCRIPTION: &str = "CarryPack Logistics offers professional packing and moving, loading and \
    unloading, car and bike transport and storage across India. Get a free moving quote today.";

#[component]
pub fn LandingPage() -> impl IntoView {
    provide_page_context();
    let notifications = provide_notifications();

    view! {
        <SeoMeta />

        <div class="relative min-h-screen bg-white overflow-x-hidden">
            <ScrollProgressBar />
            <SideNavigation />

            <main>
                <HeroSection />
                <AboutSection />
                <ServicesSection />
                <IndustriesSection />
                <NetworkSection />
                <FaqSection />
                <ContactSection />
            </main>

            <Footer />
            <ChatWidget />
            <NotificationsContainer manager=notifications />

            <ScrollAnimationScript />
        </div>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    let settings = use_context::<SiteSettings>().unwrap_or_default();
    let title = format!("{} | {}", COMPANY_NAME, TAGLINE);
    let url = settings.absolute("/");
    let image = settings.absolute("/og-image.png");
    let structured_data = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "MovingCompany",
        "name": COMPANY_NAME,
        "description": DESCRIPTION,
        "url": url,
        "areaServed": "IN",
    })
    .to_string();

    view! {
        <Title text=title.clone() />

        <Meta name="description" content=DESCRIPTION />
        <Meta name="keywords" content="packers and movers, moving company, relocation, car transport, bike transport, India" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=url.clone() />
        <Meta property="og:title" content=title.clone() />
        <Meta property="og:description" content=DESCRIPTION />
        <Meta property="og:image" content=image.clone() />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=title />
        <Meta name="twitter:description" content=DESCRIPTION />
        <Meta name="twitter:image" content=image />

        <Link rel="canonical" href=url />

        <script type="application/ld+json" inner_html=structured_data></script>
    }
}

/// Adds `visible` to `.landing-scroll-animate` elements as they enter the viewport
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                            }
                        });
                    }, { threshold: 0.1, rootMargin: '0px 0px -50px 0px' });

                    document.querySelectorAll('.landing-scroll-animate').forEach(el => observer.observe(el));
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}
