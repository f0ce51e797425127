//! Portfolio page entry point.
//!
//! Build with `wasm-pack build apps/portfolio-web --target web` and load the
//! generated module from `index.html`.

use folio_deck::DeckSettings;

/// Deck configuration for the portfolio page.
pub fn create_settings() -> DeckSettings {
    DeckSettings::new()
        .with_deck_id("deck")
        .with_dots_id("slideDots")
        .with_hero_nav_id("heroNav")
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;

    /// Runs once the module is instantiated. Module scripts are deferred, so
    /// the document has been parsed by then.
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

        let handle = folio_platform_web::mount(super::create_settings())?;
        log::info!("portfolio ready on slide {}", handle.current_index());
        Ok(())
    }
}
