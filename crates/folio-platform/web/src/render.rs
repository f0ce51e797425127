//! Paints deck and hero state onto element styles.

use folio_deck::{DeckFrame, DeckRenderer, DotNav, HeroRenderer, RevealStyle};
use web_sys::{Element, HtmlElement};

use crate::dom::DOT_ACTIVE_CLASS;

const ACTIONS_VISIBLE_CLASS: &str = "actions--visible";
const SUBTEXT_TYPING_CLASS: &str = "subtext--typing";

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("failed to set {property}: {err:?}");
    }
}

/// Writes the deck translation, per-slide reveal styles and dot state.
///
/// Styles are only written when they change between frames.
pub struct DomDeckRenderer {
    deck: HtmlElement,
    reveals: Vec<HtmlElement>,
    dots: Vec<Element>,
    nav: DotNav,
    painted_y: Option<f32>,
    painted: Vec<Option<RevealStyle>>,
}

impl DomDeckRenderer {
    pub fn new(
        deck: HtmlElement,
        reveals: Vec<HtmlElement>,
        dots: Vec<Element>,
        nav: DotNav,
    ) -> Self {
        let painted = vec![None; reveals.len()];
        Self {
            deck,
            reveals,
            dots,
            nav,
            painted_y: None,
            painted,
        }
    }
}

impl DeckRenderer for DomDeckRenderer {
    fn render(&mut self, frame: &DeckFrame<'_>) {
        if self.painted_y != Some(frame.deck_y) {
            set_style(
                &self.deck,
                "transform",
                &format!("translate3d(0px, {}px, 0px)", frame.deck_y),
            );
            self.painted_y = Some(frame.deck_y);
        }

        for ((element, painted), style) in self
            .reveals
            .iter()
            .zip(self.painted.iter_mut())
            .zip(frame.reveals)
        {
            if *painted == Some(*style) {
                continue;
            }
            set_style(element, "opacity", &style.opacity.to_string());
            set_style(
                element,
                "transform",
                &format!("translate(0%, {}%)", style.offset_percent),
            );
            *painted = Some(*style);
        }
    }

    fn set_active_dot(&mut self, index: usize) {
        self.nav.set_active(index);
        for (i, dot) in self.dots.iter().enumerate() {
            let active = self.nav.is_active(i);
            if let Err(err) = dot.class_list().toggle_with_force(DOT_ACTIVE_CLASS, active) {
                log::warn!("failed to toggle dot {i}: {err:?}");
            }
            if let Err(err) = dot.set_attribute("aria-current", self.nav.aria_current(i)) {
                log::warn!("failed to mark dot {i}: {err:?}");
            }
        }
    }
}

/// Hero action container and subtext line; either may be absent.
pub struct DomHeroRenderer {
    actions: Option<Element>,
    subtext: Option<HtmlElement>,
}

impl DomHeroRenderer {
    pub fn new(actions: Option<Element>, subtext: Option<HtmlElement>) -> Self {
        Self { actions, subtext }
    }
}

impl HeroRenderer for DomHeroRenderer {
    fn reveal_actions(&mut self) {
        if let Some(actions) = &self.actions {
            if let Err(err) = actions.class_list().add_1(ACTIONS_VISIBLE_CLASS) {
                log::warn!("failed to reveal hero actions: {err:?}");
            }
        }
    }

    fn set_subtext(&mut self, text: &str, typing: bool) {
        let Some(subtext) = &self.subtext else {
            return;
        };
        subtext.set_text_content(Some(text));
        if let Err(err) = subtext
            .class_list()
            .toggle_with_force(SUBTEXT_TYPING_CLASS, typing)
        {
            log::warn!("failed to toggle typing class: {err:?}");
        }
    }

    fn set_subtext_opacity(&mut self, opacity: f32) {
        if let Some(subtext) = &self.subtext {
            set_style(subtext, "opacity", &opacity.to_string());
        }
    }
}
