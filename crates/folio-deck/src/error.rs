use thiserror::Error;

/// Failures while assembling a deck.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck container has no slides")]
    NoSlides,
}

/// Failures while rewriting the URL fragment.
///
/// Never surfaced to users: the controller logs these and carries on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("history API unavailable")]
    Unavailable,
    #[error("fragment update refused: {0}")]
    Refused(String),
}
