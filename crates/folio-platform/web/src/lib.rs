//! Browser adapter for the Folio deck.
//!
//! Reads the page's DOM contract, forwards wheel, touch, resize and click
//! events to a [`folio_deck::DeckController`], and paints its frames back
//! onto element styles from a `requestAnimationFrame` loop that only runs
//! while something is moving.

mod dom;
mod error;
mod location;
mod mount;
mod render;

pub use error::MountError;
pub use location::BrowserLocation;
pub use mount::{mount, DeckHandle};
pub use render::{DomDeckRenderer, DomHeroRenderer};

use wasm_bindgen::JsValue;
use web_sys::Window;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Thin wrapper over the browser window for the measurements the deck needs.
#[derive(Clone)]
pub struct WebPlatform {
    window: Window,
}

impl WebPlatform {
    pub fn new() -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        Ok(Self { window })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Layout viewport height in CSS pixels.
    pub fn viewport_height(&self) -> f32 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0) as f32
    }

    /// Whether the user asked the OS for less motion. Read once at mount.
    pub fn prefers_reduced_motion(&self) -> bool {
        match self.window.match_media(REDUCED_MOTION_QUERY) {
            Ok(Some(query)) => query.matches(),
            _ => false,
        }
    }

    pub fn supports_pointer_events(&self) -> bool {
        js_sys::Reflect::has(&self.window, &JsValue::from_str("PointerEvent")).unwrap_or(false)
    }
}
