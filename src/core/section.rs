//! Page sections and scroll geometry
//!
//! The landing page is a fixed, ordered list of sections. This module owns
//! that list plus the arithmetic used by the scroll-spy:
//! - which section straddles the reference line near the top of the viewport
//! - where to scroll so a section clears the fixed header
//! - how far down the page the reader is

/// Space kept free above a section after navigating to it (px)
pub const HEADER_OFFSET: f64 = 80.0;

/// Distance of the scroll-spy reference line from the viewport top (px)
pub const SPY_LINE: f64 = 100.0;

/// Page offset after which the header counts as "scrolled" (px)
pub const SCROLLED_THRESHOLD: f64 = 100.0;

/// Identifier of a landing page section, in page order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Services,
    Industries,
    Network,
    Faq,
    Contact,
}

impl SectionId {
    /// All sections in the order they appear on the page
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Industries,
        SectionId::Network,
        SectionId::Faq,
        SectionId::Contact,
    ];

    /// DOM element id of the section
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Industries => "industries",
            SectionId::Network => "network",
            SectionId::Faq => "faq",
            SectionId::Contact => "contact",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Label shown in the navigation indicator
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Services => "Services",
            SectionId::Industries => "Industries",
            SectionId::Network => "Network",
            SectionId::Faq => "FAQ",
            SectionId::Contact => "Contact",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Vertical extent of an element relative to the viewport, as reported by
/// `getBoundingClientRect()`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether the element crosses the horizontal line at `line` px
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Find the first section (in page order) crossing the reference line.
///
/// `probe` returns the current bounds of a section, or `None` when the
/// element is not mounted. Earlier sections win ties.
pub fn section_in_view<F>(probe: F) -> Option<SectionId>
where
    F: Fn(SectionId) -> Option<SectionBounds>,
{
    SectionId::ALL
        .into_iter()
        .find(|&id| probe(id).is_some_and(|bounds| bounds.straddles(SPY_LINE)))
}

/// Absolute scroll position that puts a section just below the header
pub fn scroll_target(element_top: f64, page_offset: f64) -> f64 {
    element_top + page_offset - HEADER_OFFSET
}

/// Reading progress in percent, clamped to `0.0..=100.0`
pub fn scroll_progress(page_offset: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (page_offset / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn is_scrolled(page_offset: f64) -> bool {
    page_offset > SCROLLED_THRESHOLD
}

/// Active-section tracker shared by the page shell and the nav indicator
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSpy {
    active: SectionId,
}

impl ScrollSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Re-evaluate after a scroll event. Keeps the current section when
    /// nothing crosses the reference line.
    pub fn observe<F>(&mut self, probe: F) -> SectionId
    where
        F: Fn(SectionId) -> Option<SectionBounds>,
    {
        if let Some(id) = section_in_view(probe) {
            self.active = id;
        }
        self.active
    }

    /// Navigate to `id`. Returns the absolute scroll target, or `None` when
    /// the section is not mounted (no-op). The section is marked active
    /// immediately, before any scrolling happens.
    pub fn navigate<F>(&mut self, id: SectionId, page_offset: f64, probe: F) -> Option<f64>
    where
        F: Fn(SectionId) -> Option<SectionBounds>,
    {
        let bounds = probe(id)?;
        self.active = id;
        Some(scroll_target(bounds.top, page_offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lay out sections back to back, each `height` px tall, with the page
    /// scrolled by `offset`.
    fn stacked(height: f64, offset: f64) -> impl Fn(SectionId) -> Option<SectionBounds> {
        move |id| {
            let index = SectionId::ALL.iter().position(|s| *s == id)? as f64;
            let top = index * height - offset;
            Some(SectionBounds::new(top, top + height))
        }
    }

    #[test]
    fn test_parse_round_trips_every_id() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::parse(id.as_str()), Some(id));
        }
        assert_eq!(SectionId::parse("pricing"), None);
        assert_eq!(SectionId::parse("FAQ"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SectionId::Faq.label(), "FAQ");
        assert_eq!(SectionId::Industries.label(), "Industries");
    }

    #[test]
    fn test_straddles_is_inclusive() {
        assert!(SectionBounds::new(100.0, 500.0).straddles(100.0));
        assert!(SectionBounds::new(-400.0, 100.0).straddles(100.0));
        assert!(!SectionBounds::new(101.0, 500.0).straddles(100.0));
        assert!(!SectionBounds::new(-400.0, 99.0).straddles(100.0));
    }

    #[test]
    fn test_section_in_view_at_top() {
        assert_eq!(section_in_view(stacked(800.0, 0.0)), Some(SectionId::Home));
    }

    #[test]
    fn test_section_in_view_mid_page() {
        // Services spans 1600..2400; line at offset+100
        assert_eq!(
            section_in_view(stacked(800.0, 1600.0)),
            Some(SectionId::Services)
        );
    }

    #[test]
    fn test_section_in_view_tie_prefers_earlier() {
        // Boundary between about and services sits exactly on the line
        let probe = stacked(800.0, 1500.0);
        assert_eq!(section_in_view(probe), Some(SectionId::About));
    }

    #[test]
    fn test_section_in_view_ignores_missing_elements() {
        let probe = |id: SectionId| match id {
            SectionId::Faq => Some(SectionBounds::new(0.0, 400.0)),
            _ => None,
        };
        assert_eq!(section_in_view(probe), Some(SectionId::Faq));
        assert_eq!(section_in_view(|_| None), None);
    }

    #[test]
    fn test_observe_keeps_active_when_nothing_matches() {
        let mut spy = ScrollSpy::new();
        spy.observe(stacked(800.0, 2400.0));
        assert_eq!(spy.active(), SectionId::Industries);

        // Gap between sections: nothing crosses the line
        let gap = |_| Some(SectionBounds::new(200.0, 300.0));
        assert_eq!(spy.observe(gap), SectionId::Industries);
    }

    #[test]
    fn test_observe_is_idempotent() {
        let mut spy = ScrollSpy::new();
        let first = spy.observe(stacked(800.0, 3300.0));
        let second = spy.observe(stacked(800.0, 3300.0));
        assert_eq!(first, second);
        assert_eq!(first, SectionId::Network);
    }

    #[test]
    fn test_observe_follows_scroll_direction() {
        let mut spy = ScrollSpy::new();
        let mut seen = Vec::new();
        for offset in (0..7).map(|i| f64::from(i) * 800.0) {
            seen.push(spy.observe(stacked(800.0, offset)));
        }
        assert_eq!(seen, SectionId::ALL.to_vec());

        let mut back = Vec::new();
        for offset in (0..7).rev().map(|i| f64::from(i) * 800.0) {
            back.push(spy.observe(stacked(800.0, offset)));
        }
        let mut expected = SectionId::ALL.to_vec();
        expected.reverse();
        assert_eq!(back, expected);
    }

    #[test]
    fn test_navigate_marks_active_immediately() {
        let mut spy = ScrollSpy::new();
        spy.observe(stacked(800.0, 800.0));
        assert_eq!(spy.active(), SectionId::About);

        let target = spy.navigate(SectionId::Services, 800.0, stacked(800.0, 800.0));
        assert_eq!(spy.active(), SectionId::Services);
        // Services top is 800 in the viewport, page offset 800
        assert_eq!(target, Some(1600.0 - HEADER_OFFSET));
    }

    #[test]
    fn test_navigate_missing_section_is_noop() {
        let mut spy = ScrollSpy::new();
        let target = spy.navigate(SectionId::Contact, 0.0, |_| None);
        assert_eq!(target, None);
        assert_eq!(spy.active(), SectionId::Home);
    }

    #[test]
    fn test_scroll_target_subtracts_header() {
        assert_eq!(scroll_target(300.0, 1000.0), 1220.0);
        assert_eq!(scroll_target(-200.0, 1000.0), 720.0);
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 5000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 5000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(4000.0, 5000.0, 1000.0), 100.0);
        // Overscroll (e.g. rubber banding) stays in range
        assert_eq!(scroll_progress(4200.0, 5000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-50.0, 5000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_scroll_progress_short_document() {
        assert_eq!(scroll_progress(0.0, 600.0, 900.0), 0.0);
        assert_eq!(scroll_progress(0.0, 900.0, 900.0), 0.0);
    }

    #[test]
    fn test_is_scrolled() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(100.0));
        assert!(is_scrolled(100.5));
    }
}
