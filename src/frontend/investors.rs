#![allow(non_snake_case)]

use super::*;

use super::contact::ContactSection;
use super::hero::Hero;
use super::roadmap::Roadmap;
use super::stats::StatSection;
use super::team::TeamSection;
use super::tiers::TierSection;
use crate::view::PageView;

#[component]
pub fn Investors() -> Element {
    let content = use_context::<PageContent>();
    let view = PageView::render(&content);

    rsx! {
        Hero {}
        StatSection { stats: view.stats }
        TierSection { tiers: view.tiers }
        Roadmap { entries: view.timeline }
        TeamSection { team: view.team }
        ContactSection { contact: view.contact }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Element {
        use_context_provider(|| PageContent::embedded().unwrap());
        rsx! { Investors {} }
    }

    fn render_page() -> String {
        let mut dom = VirtualDom::new(page);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_page_renders_every_section() {
        let html = render_page();
        assert!(html.contains("id=\"contact\""));
        assert!(html.contains("Contact Us"));
        assert!(html.contains("Schedule a Meeting"));
        assert_eq!(html.matches("tier-card").count(), 3);
        assert_eq!(html.matches("Inquire Now").count(), 1);
        assert_eq!(html.matches("Notify Me").count(), 2);
        assert!(html.contains("mailto:investors@vitalis.app"));
        assert!(html.contains("api.dicebear.com"));
    }

    #[test]
    fn test_page_render_is_byte_identical() {
        assert_eq!(render_page(), render_page());
    }
}
