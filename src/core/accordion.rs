//! Single-open accordion state

/// Accordion where at most one panel is expanded at a time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accordion<P> {
    open: Option<P>,
}

impl<P> Default for Accordion<P> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<P: Copy + PartialEq> Accordion<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently expanded panel, if any
    pub fn open_panel(&self) -> Option<P> {
        self.open
    }

    pub fn is_open(&self, panel: P) -> bool {
        self.open == Some(panel)
    }

    /// Click on a panel header: collapse it if it is the open one,
    /// otherwise expand it (collapsing whatever was open before).
    pub fn toggle(&mut self, panel: P) {
        self.open = if self.is_open(panel) { None } else { Some(panel) };
    }

    pub fn collapse_all(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let accordion = Accordion::<usize>::new();
        assert_eq!(accordion.open_panel(), None);
        assert!(!accordion.is_open(0));
    }

    #[test]
    fn test_toggle_opens_then_closes() {
        let mut accordion = Accordion::new();
        accordion.toggle(2usize);
        assert!(accordion.is_open(2));
        accordion.toggle(2);
        assert_eq!(accordion.open_panel(), None);
    }

    #[test]
    fn test_only_one_panel_open() {
        let mut accordion = Accordion::new();
        accordion.toggle(1usize);
        accordion.toggle(4);
        assert!(!accordion.is_open(1));
        assert!(accordion.is_open(4));
        assert_eq!(accordion.open_panel(), Some(4));
    }

    #[test]
    fn test_double_toggle_restores_original_state() {
        let mut accordion = Accordion::new();
        let before = accordion;
        accordion.toggle(3usize);
        accordion.toggle(3);
        assert_eq!(accordion, before);

        accordion.toggle(0);
        let before = accordion;
        accordion.toggle(0);
        accordion.toggle(0);
        assert_eq!(accordion, before);

        // Opening another panel and closing it does not reopen the first
        accordion.toggle(5);
        accordion.toggle(5);
        assert_eq!(accordion.open_panel(), None);
    }

    #[test]
    fn test_collapse_all() {
        let mut accordion = Accordion::new();
        accordion.toggle(7usize);
        accordion.collapse_all();
        assert_eq!(accordion.open_panel(), None);
    }
}
