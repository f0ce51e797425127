//! Wires a deck onto the live page.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use folio_core::{Clock, Millis, SystemClock};
use folio_deck::{DeckController, DeckSettings, DotNav, HeroIntro, SlideSet};
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, HtmlElement, PointerEvent, TouchEvent,
    WheelEvent, Window,
};

use crate::dom::{self, SlideElement};
use crate::error::MountError;
use crate::location::BrowserLocation;
use crate::render::{DomDeckRenderer, DomHeroRenderer};
use crate::WebPlatform;

const TOUCH_POINTER: &str = "touch";
const ACTION_ATTR: &str = "data-action";
/// Action value that leaves the link to the browser.
const RESUME_ACTION: &str = "resume";

type WebDeck = DeckController<DomDeckRenderer, BrowserLocation>;

/// Everything the event handlers and the frame loop share.
struct Page {
    clock: SystemClock,
    deck: WebDeck,
    hero: HeroIntro<DomHeroRenderer>,
}

impl Page {
    fn now(&self) -> Millis {
        self.clock.now_millis()
    }

    fn needs_frame(&self) -> bool {
        self.deck.needs_frame() || self.hero.needs_frame()
    }

    fn tick(&mut self) {
        let now = self.now();
        self.deck.tick(now);
        self.hero.tick(now);
    }
}

type SharedPage = Rc<RefCell<Page>>;

struct FrameLoopInner {
    window: Window,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
    pending: Cell<bool>,
}

/// `requestAnimationFrame` loop that runs only while the page needs frames.
#[derive(Clone)]
struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

impl FrameLoop {
    fn new(window: Window, page: SharedPage) -> Self {
        let inner = Rc::new(FrameLoopInner {
            window,
            callback: RefCell::new(None),
            pending: Cell::new(false),
        });
        let weak: Weak<FrameLoopInner> = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(false);
            let busy = {
                let mut page = page.borrow_mut();
                page.tick();
                page.needs_frame()
            };
            if busy {
                FrameLoop { inner }.request();
            }
        }) as Box<dyn FnMut()>);
        *inner.callback.borrow_mut() = Some(closure);
        Self { inner }
    }

    fn request(&self) {
        if self.inner.pending.get() {
            return;
        }
        let callback = self.inner.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match self
            .inner
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(_) => self.inner.pending.set(true),
            Err(err) => log::error!("requestAnimationFrame failed: {err:?}"),
        }
    }
}

/// Handle to a mounted deck for programmatic navigation.
#[derive(Clone)]
pub struct DeckHandle {
    page: SharedPage,
    frames: FrameLoop,
}

impl DeckHandle {
    pub fn current_index(&self) -> usize {
        self.page.borrow().deck.current_index()
    }

    pub fn go_to_index(&self, index: usize) {
        self.drive(|page, now| page.deck.go_to_index(index, now));
    }

    pub fn go_to_id(&self, id: &str) {
        self.drive(|page, now| page.deck.go_to_id(id, now));
    }

    /// Runs `f` against the page, then wakes the frame loop if anything moved.
    fn drive(&self, f: impl FnOnce(&mut Page, Millis)) {
        let busy = {
            let mut page = self.page.borrow_mut();
            let now = page.now();
            f(&mut *page, now);
            page.needs_frame()
        };
        if busy {
            self.frames.request();
        }
    }
}

fn listen<E, F>(target: &EventTarget, event: &str, once: bool, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    options.set_once(once);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Attaches the deck described by `settings` to the current page.
///
/// Only a missing deck container (or one without slides) is an error;
/// every other element in the contract is optional.
pub fn mount(settings: DeckSettings) -> Result<DeckHandle, JsValue> {
    let platform = WebPlatform::new()?;
    let window = platform.window().clone();
    let document = window.document().ok_or(MountError::NoDocument)?;

    let deck_element = document
        .get_element_by_id(&settings.deck_id)
        .ok_or_else(|| MountError::MissingDeck(settings.deck_id.clone()))?;
    let deck_html = deck_element.clone().dyn_into::<HtmlElement>()?;

    let (slides, reveals): (Vec<_>, Vec<_>) =
        dom::scan_slides(&deck_element, &settings.reveal_selector)
            .into_iter()
            .map(|SlideElement { slide, reveal }| (slide, reveal))
            .unzip();
    let slides = SlideSet::new(slides).map_err(MountError::from)?;

    let dots_container = document.get_element_by_id(&settings.dots_id);
    let dots = match &dots_container {
        Some(container) => dom::build_dots(&document, container, &slides.labels())?,
        None => Vec::new(),
    };

    let hero_nav = document.get_element_by_id(&settings.hero_nav_id);
    let action_links = hero_nav
        .as_ref()
        .map(|nav| dom::query_all(nav, "a"))
        .unwrap_or_default();
    dom::index_actions(&action_links);

    let subtext = dom::query_document(&document, &settings.subtext_selector)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());
    let subtext_text = subtext.as_ref().and_then(|element| element.text_content());
    let title = dom::query_document(&document, &settings.hero_title_selector);

    let motion = settings.motion(|| platform.prefers_reduced_motion());
    let clock = SystemClock::new();
    let now = clock.now_millis();

    let nav = DotNav::from_slides(&slides, 0);
    let deck = DeckController::new(
        slides,
        settings.tuning,
        motion,
        platform.viewport_height(),
        DomDeckRenderer::new(deck_html, reveals, dots.clone(), nav),
        BrowserLocation::new(window.clone()),
    );
    let hero = HeroIntro::new(
        DomHeroRenderer::new(hero_nav.clone(), subtext),
        subtext_text.as_deref(),
        motion,
        now,
    );

    let page = Rc::new(RefCell::new(Page { clock, deck, hero }));
    let handle = DeckHandle {
        frames: FrameLoop::new(window.clone(), page.clone()),
        page,
    };

    wire_wheel(&window, &handle)?;
    if platform.supports_pointer_events() {
        wire_pointer(&window, &deck_element, &handle)?;
    } else {
        wire_touch(&deck_element, &handle)?;
    }
    wire_resize(&platform, &handle)?;
    wire_dots(&dots, &handle)?;
    wire_actions(&action_links, &handle)?;
    if let Some(title) = &title {
        let target = handle.clone();
        listen(title, "animationend", true, move |_: Event| {
            target.drive(|page, now| page.hero.title_animation_ended(now));
        })?;
    }

    if handle.page.borrow().needs_frame() {
        handle.frames.request();
    }
    log::info!(
        "mounted deck #{} ({} dots, {} action links, title {})",
        settings.deck_id,
        dots.len(),
        action_links.len(),
        if title.is_some() { "found" } else { "absent" }
    );
    Ok(handle)
}

fn wire_wheel(window: &Window, handle: &DeckHandle) -> Result<(), JsValue> {
    let target = handle.clone();
    listen(window, "wheel", false, move |event: WheelEvent| {
        event.prevent_default();
        let delta = event.delta_y() as f32;
        target.drive(|page, now| page.deck.wheel(delta, now));
    })
}

fn wire_pointer(window: &Window, deck: &Element, handle: &DeckHandle) -> Result<(), JsValue> {
    {
        let target = handle.clone();
        let capture = deck.clone();
        listen(deck, "pointerdown", false, move |event: PointerEvent| {
            if event.pointer_type() != TOUCH_POINTER {
                return;
            }
            event.prevent_default();
            let _ = capture.set_pointer_capture(event.pointer_id());
            let (x, y) = (event.client_x() as f32, event.client_y() as f32);
            let pointer = Some(event.pointer_id());
            target.drive(|page, now| page.deck.pointer_down(pointer, x, y, now));
        })?;
    }
    {
        let target = handle.clone();
        listen(deck, "pointermove", false, move |event: PointerEvent| {
            if event.pointer_type() != TOUCH_POINTER {
                return;
            }
            event.prevent_default();
            let (x, y) = (event.client_x() as f32, event.client_y() as f32);
            let pointer = Some(event.pointer_id());
            target.drive(|page, now| page.deck.pointer_move(pointer, x, y, now));
        })?;
    }
    for kind in ["pointerup", "pointercancel"] {
        let target = handle.clone();
        let capture = deck.clone();
        listen(window, kind, false, move |event: PointerEvent| {
            if event.pointer_type() != TOUCH_POINTER {
                return;
            }
            event.prevent_default();
            let _ = capture.release_pointer_capture(event.pointer_id());
            let pointer = Some(event.pointer_id());
            target.drive(|page, now| page.deck.pointer_up(pointer, now));
        })?;
    }
    Ok(())
}

/// Single-finger Touch Events for browsers without Pointer Events.
fn wire_touch(deck: &Element, handle: &DeckHandle) -> Result<(), JsValue> {
    {
        let target = handle.clone();
        listen(deck, "touchstart", false, move |event: TouchEvent| {
            let touches = event.touches();
            if touches.length() != 1 {
                return;
            }
            let Some(touch) = touches.item(0) else {
                return;
            };
            event.prevent_default();
            let (x, y) = (touch.client_x() as f32, touch.client_y() as f32);
            let pointer = Some(touch.identifier());
            target.drive(|page, now| page.deck.pointer_down(pointer, x, y, now));
        })?;
    }
    {
        let target = handle.clone();
        listen(deck, "touchmove", false, move |event: TouchEvent| {
            let touches = event.touches();
            if touches.length() != 1 {
                return;
            }
            let Some(touch) = touches.item(0) else {
                return;
            };
            event.prevent_default();
            let (x, y) = (touch.client_x() as f32, touch.client_y() as f32);
            target.drive(|page, now| page.deck.pointer_move(None, x, y, now));
        })?;
    }
    for kind in ["touchend", "touchcancel"] {
        let target = handle.clone();
        listen(deck, kind, false, move |event: TouchEvent| {
            event.prevent_default();
            target.drive(|page, now| page.deck.pointer_up(None, now));
        })?;
    }
    Ok(())
}

fn wire_resize(platform: &WebPlatform, handle: &DeckHandle) -> Result<(), JsValue> {
    let target = handle.clone();
    let measure = platform.clone();
    listen(platform.window(), "resize", false, move |_: Event| {
        let height = measure.viewport_height();
        target.drive(|page, now| page.deck.resize(height, now));
    })
}

fn wire_dots(dots: &[Element], handle: &DeckHandle) -> Result<(), JsValue> {
    for (index, dot) in dots.iter().enumerate() {
        let target = handle.clone();
        listen(dot, "click", false, move |_: Event| {
            target.go_to_index(index);
        })?;
    }
    Ok(())
}

fn wire_actions(links: &[Element], handle: &DeckHandle) -> Result<(), JsValue> {
    for link in links {
        let target = handle.clone();
        let source = link.clone();
        listen(link, "click", false, move |event: Event| {
            let action = source.get_attribute(ACTION_ATTR).unwrap_or_default();
            if action.is_empty() || action == RESUME_ACTION {
                return;
            }
            event.prevent_default();
            target.go_to_id(&action);
        })?;
    }
    Ok(())
}
