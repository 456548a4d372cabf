//! Browser side of the lead submission
//!
//! `FetchTransport` posts the lead with `gloo-net`. The endpoint and public
//! URL come from the `<meta>` tags the server renders into the shell.

use chrono::{Local, NaiveDate};

use crate::core::{LeadTransport, SiteSettings, TransportError, TransportResponse};

/// `fetch`-backed transport
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

impl LeadTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, TransportError> {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_net::http::Request;

            let response = Request::post(url)
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| TransportError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            // The server has answered; its status decides the outcome
            let status = response.status();
            Ok(TransportResponse::with_body(status, response.text().await))
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (url, body);
            Err(TransportError::Network(
                "lead submission is only available in the browser".to_string(),
            ))
        }
    }
}

/// Settings the server rendered into the document head
pub fn page_settings() -> SiteSettings {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::web_sys;

        let document = web_sys::window().and_then(|w| w.document());
        SiteSettings::from_meta(|name| {
            let selector = format!("meta[name=\"{}\"]", name);
            document
                .as_ref()?
                .query_selector(&selector)
                .ok()
                .flatten()?
                .get_attribute("content")
        })
    }
    #[cfg(feature = "ssr")]
    {
        SiteSettings::default()
    }
}

/// Lead endpoint published by the server, or the built-in default
pub fn lead_endpoint() -> String {
    page_settings().lead_endpoint
}

/// Today's date in the visitor's local time zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
