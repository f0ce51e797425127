//! DOM contract: slides, reveal blocks, dot buttons and hero elements.

use folio_deck::{LabelHints, Slide};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

const NAV_LABEL_ATTR: &str = "data-nav-label";
const HEADING_SELECTOR: &str = "h1, h2, h3";
pub(crate) const DOT_CLASS: &str = "dot-nav__button";
pub(crate) const DOT_ACTIVE_CLASS: &str = "dot-nav__button--active";

/// One slide element as found in the deck container.
pub(crate) struct SlideElement {
    pub slide: Slide,
    /// Block whose opacity and lift are animated; the slide itself if it has none.
    pub reveal: HtmlElement,
}

/// Direct children of the deck, in document order.
pub(crate) fn scan_slides(deck: &Element, reveal_selector: &str) -> Vec<SlideElement> {
    let children = deck.children();
    (0..children.length())
        .filter_map(|index| children.item(index))
        .filter_map(|element| {
            let reveal = query(&element, reveal_selector).unwrap_or_else(|| element.clone());
            let reveal = reveal.dyn_into::<HtmlElement>().ok()?;
            Some(SlideElement {
                slide: describe(&element),
                reveal,
            })
        })
        .collect()
}

fn describe(element: &Element) -> Slide {
    let hints = LabelHints {
        explicit: element
            .get_attribute(NAV_LABEL_ATTR)
            .filter(|label| !label.is_empty()),
        labeled_descendant: query(element, &format!("[{NAV_LABEL_ATTR}]"))
            .and_then(|labeled| labeled.text_content()),
        heading: query(element, HEADING_SELECTOR).and_then(|heading| heading.text_content()),
    };
    let id = element.id();
    let slide = if id.is_empty() {
        Slide::anonymous()
    } else {
        Slide::new(id)
    };
    slide.with_hints(hints)
}

/// First match below `root`, treating selector errors as "absent".
pub(crate) fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub(crate) fn query_document(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Elements below `root` matching `selector`.
pub(crate) fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Replaces the container's content with one labelled button per slide.
pub(crate) fn build_dots(
    document: &Document,
    container: &Element,
    labels: &[String],
) -> Result<Vec<Element>, JsValue> {
    container.set_inner_html("");
    labels
        .iter()
        .map(|label| {
            let button = document.create_element("button")?;
            button.set_class_name(DOT_CLASS);
            button.set_attribute("type", "button")?;
            button.set_attribute("aria-label", label)?;
            container.append_child(&button)?;
            Ok(button)
        })
        .collect()
}

/// Gives each action link its stagger index for the reveal animation.
pub(crate) fn index_actions(links: &[Element]) {
    for (index, link) in links.iter().enumerate() {
        if let Some(link) = link.dyn_ref::<HtmlElement>() {
            if let Err(err) = link.style().set_property("--i", &index.to_string()) {
                log::warn!("could not index action link {index}: {err:?}");
            }
        }
    }
}
