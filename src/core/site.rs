//! Settings the server passes to the rendered page
//!
//! The server renders these into `<meta>` tags in the document head; the
//! browser reads them back after hydration.

use serde::{Deserialize, Serialize};

use super::submission::DEFAULT_LEAD_ENDPOINT;

pub const DEFAULT_PUBLIC_URL: &str = "https://carrypacklogistics.in/";

/// `<meta name=...>` carrying the lead endpoint
pub const META_LEAD_ENDPOINT: &str = "lead-endpoint";

/// `<meta name=...>` carrying the public site URL
pub const META_PUBLIC_URL: &str = "public-url";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub lead_endpoint: String,
    pub public_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            lead_endpoint: DEFAULT_LEAD_ENDPOINT.to_string(),
            public_url: DEFAULT_PUBLIC_URL.to_string(),
        }
    }
}

impl SiteSettings {
    /// Rebuild settings from `<meta>` contents looked up by name. Missing
    /// or blank entries fall back to the defaults.
    pub fn from_meta<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str, default: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            lead_endpoint: read(META_LEAD_ENDPOINT, DEFAULT_LEAD_ENDPOINT),
            public_url: read(META_PUBLIC_URL, DEFAULT_PUBLIC_URL),
        }
    }

    /// Absolute URL for a path under the public site
    pub fn absolute(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.public_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SiteSettings::default();
        assert_eq!(settings.lead_endpoint, DEFAULT_LEAD_ENDPOINT);
        assert_eq!(settings.public_url, DEFAULT_PUBLIC_URL);
    }

    #[test]
    fn test_from_meta() {
        let settings = SiteSettings::from_meta(|name| match name {
            META_LEAD_ENDPOINT => Some("https://leads.example.com/api/lead".to_string()),
            META_PUBLIC_URL => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(settings.lead_endpoint, "https://leads.example.com/api/lead");
        assert_eq!(settings.public_url, DEFAULT_PUBLIC_URL);

        assert_eq!(SiteSettings::from_meta(|_| None), SiteSettings::default());
    }

    #[test]
    fn test_absolute_joins_single_slash() {
        let settings = SiteSettings::default();
        assert_eq!(
            settings.absolute("/og-image.png"),
            "https://carrypacklogistics.in/og-image.png"
        );
        let bare = SiteSettings {
            public_url: "https://example.com".to_string(),
            ..SiteSettings::default()
        };
        assert_eq!(bare.absolute("og-image.png"), "https://example.com/og-image.png");
        assert_eq!(bare.absolute(""), "https://example.com/");
    }
}
