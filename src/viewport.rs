use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions};

pub const CONTACT_ANCHOR: &str = "contact";

/// Finds sections on the page and scrolls them into view.
pub trait ViewportNavigator {
    type Section;

    fn find_section(&self, id: &str) -> Option<Self::Section>;
    fn scroll_into_view(&self, section: &Self::Section);
}

/// Smooth-scrolls to the section with the given id.
///
/// Returns false, and does nothing else, when no such section exists.
pub fn scroll_to_section<N: ViewportNavigator>(navigator: &N, id: &str) -> bool {
    match navigator.find_section(id) {
        Some(section) => {
            navigator.scroll_into_view(&section);
            true
        }
        None => {
            tracing::debug!("no section with id {:?}, not scrolling", id);
            false
        }
    }
}

/// The browser DOM.
pub struct WebViewport;

impl ViewportNavigator for WebViewport {
    type Section = Element;

    fn find_section(&self, id: &str) -> Option<Element> {
        window()?.document()?.get_element_by_id(id)
    }

    fn scroll_into_view(&self, section: &Element) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingViewport {
        sections: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl RecordingViewport {
        fn new(sections: Vec<&'static str>) -> Self {
            Self {
                sections,
                scrolled: RefCell::new(vec![]),
            }
        }
    }

    impl ViewportNavigator for RecordingViewport {
        type Section = String;

        fn find_section(&self, id: &str) -> Option<String> {
            self.sections
                .iter()
                .find(|s| **s == id)
                .map(|s| s.to_string())
        }

        fn scroll_into_view(&self, section: &String) {
            self.scrolled.borrow_mut().push(section.clone());
        }
    }

    #[test]
    fn test_scroll_to_present_section() {
        let viewport = RecordingViewport::new(vec!["tiers", CONTACT_ANCHOR]);
        assert!(scroll_to_section(&viewport, CONTACT_ANCHOR));
        assert_eq!(*viewport.scrolled.borrow(), vec![CONTACT_ANCHOR.to_string()]);
    }

    #[test]
    fn test_missing_section_is_noop() {
        let viewport = RecordingViewport::new(vec!["tiers"]);
        assert!(!scroll_to_section(&viewport, CONTACT_ANCHOR));
        assert!(viewport.scrolled.borrow().is_empty());
    }
}
