use folio_deck::DeckError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons the deck could not be attached to the page.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no global window exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("deck container with id '{0}' not found")]
    MissingDeck(String),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
