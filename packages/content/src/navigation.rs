//! Navbar state: active link, mobile menu and the "scrolled" style.

use serde::Deserialize;

use crate::config::NavConfig;

/// Vertical span of one tracked page section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// One scroll event as reported by the browser.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub nav_height: f64,
    #[serde(default)]
    pub sections: Vec<SectionBounds>,
}

/// Where to scroll so the target section sits just below the fixed navbar.
pub fn scroll_target(offset_top: f64, nav_height: f64) -> f64 {
    (offset_top - nav_height).max(0.0)
}

/// The first section whose span (shifted up by the navbar and the
/// lookahead margin) contains `scroll_y`.
pub fn active_section<'a>(
    sections: &'a [SectionBounds],
    scroll_y: f64,
    nav_height: f64,
    lookahead: f64,
) -> Option<&'a str> {
    sections
        .iter()
        .find(|s| {
            let top = s.top - nav_height - lookahead;
            scroll_y >= top && scroll_y < top + s.height
        })
        .map(|s| s.id.as_str())
}

/// Downward shift of the hero for the current scroll position. Overscroll
/// (negative `scroll_y`) leaves it in place.
pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y.max(0.0) * rate
}

/// Section id for a same-page anchor (`#products` → `products`).
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavState {
    /// Section id of the highlighted link.
    pub active: Option<String>,
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn is_active(&self, href: &str) -> bool {
        anchor_id(href).is_some_and(|id| self.active.as_deref() == Some(id))
    }

    /// Handle a click on a nav link. Returns the section to scroll to for
    /// same-page anchors; other links navigate normally.
    pub fn click_anchor<'h>(&mut self, href: &'h str) -> Option<&'h str> {
        let id = anchor_id(href)?;
        self.active = Some(id.to_string());
        self.menu_open = false;
        Some(id)
    }

    pub fn observe_scroll(&mut self, sample: &ScrollSample, config: &NavConfig) {
        self.scrolled = sample.scroll_y > config.scrolled_threshold;
        self.active = active_section(
            &sample.sections,
            sample.scroll_y,
            sample.nav_height,
            config.lookahead,
        )
        .map(str::to_string);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds {
                id: "hero".into(),
                top: 0.0,
                height: 600.0,
            },
            SectionBounds {
                id: "products".into(),
                top: 600.0,
                height: 800.0,
            },
            SectionBounds {
                id: "contact".into(),
                top: 1400.0,
                height: 500.0,
            },
        ]
    }

    fn cfg() -> NavConfig {
        NavConfig {
            scrolled_threshold: 100.0,
            lookahead: 100.0,
        }
    }

    #[test]
    fn scroll_inside_second_section_activates_only_it() {
        let mut state = NavState::default();
        let sample = ScrollSample {
            scroll_y: 900.0,
            nav_height: 80.0,
            sections: sections(),
        };
        state.observe_scroll(&sample, &cfg());
        assert!(state.is_active("#products"));
        assert!(!state.is_active("#hero"));
        assert!(!state.is_active("#contact"));
        assert!(state.scrolled);
    }

    #[test]
    fn lookahead_shifts_boundaries() {
        // products starts at 600 - 80 - 100 = 420
        assert_eq!(active_section(&sections(), 419.0, 80.0, 100.0), Some("hero"));
        assert_eq!(active_section(&sections(), 420.0, 80.0, 100.0), Some("products"));
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let mut overlapping = sections();
        overlapping[1].top = 100.0;
        assert_eq!(active_section(&overlapping, 150.0, 0.0, 0.0), Some("hero"));
    }

    #[test]
    fn no_section_clears_active_link() {
        let mut state = NavState {
            active: Some("hero".into()),
            ..NavState::default()
        };
        let sample = ScrollSample {
            scroll_y: 5000.0,
            nav_height: 80.0,
            sections: sections(),
        };
        state.observe_scroll(&sample, &cfg());
        assert_eq!(state.active, None);
    }

    #[test]
    fn scrolled_only_past_threshold() {
        let mut state = NavState::default();
        state.observe_scroll(
            &ScrollSample {
                scroll_y: 100.0,
                ..ScrollSample::default()
            },
            &cfg(),
        );
        assert!(!state.scrolled);
    }

    #[test]
    fn anchor_click_activates_and_closes_menu() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        assert_eq!(state.click_anchor("#contact"), Some("contact"));
        assert!(state.is_active("#contact"));
        assert!(!state.menu_open);
    }

    #[test]
    fn page_links_are_not_intercepted() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert_eq!(state.click_anchor("/blog"), None);
        assert_eq!(state.click_anchor("#"), None);
        assert!(state.menu_open);
        assert_eq!(state.active, None);
    }

    #[test]
    fn hero_moves_at_half_scroll_speed() {
        let rate = crate::SiteConfig::default().parallax_rate;
        assert_eq!(parallax_offset(0.0, rate), 0.0);
        assert_eq!(parallax_offset(300.0, rate), 150.0);
        assert_eq!(parallax_offset(-40.0, rate), 0.0);
    }

    #[test]
    fn scroll_target_subtracts_navbar() {
        assert_eq!(scroll_target(600.0, 80.0), 520.0);
        assert_eq!(scroll_target(20.0, 80.0), 0.0);
    }
}
