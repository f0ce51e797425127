use folio_deck::{Location, LocationError};
use wasm_bindgen::JsValue;
use web_sys::Window;

/// `window.location` fragment, rewritten with `history.replaceState` so
/// slide changes never grow the history stack.
pub struct BrowserLocation {
    window: Window,
}

impl BrowserLocation {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Location for BrowserLocation {
    fn fragment(&self) -> String {
        self.window
            .location()
            .hash()
            .unwrap_or_default()
            .trim_start_matches('#')
            .to_owned()
    }

    fn replace_fragment(&mut self, fragment: &str) -> Result<(), LocationError> {
        let history = self
            .window
            .history()
            .map_err(|_| LocationError::Unavailable)?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(fragment))
            .map_err(|err| LocationError::Refused(format!("{err:?}")))
    }
}
