use geosnap_catalog::CatalogError;
use thiserror::Error;

/// Errors from round selection.
///
/// Each insufficiency variant carries the found and required counts so the
/// caller can produce an actionable message ("widen your date range").
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The catalog could not supply enough valid candidates, or was
    /// unreachable or misbehaving.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The pool spans fewer distinct capture days than rounds requested.
    /// Detected before any sampling starts.
    #[error("not enough distinct capture days: found {found}, need {required}")]
    InsufficientDays { found: usize, required: usize },

    /// The sampler ran out of days or attempts before filling the selection.
    #[error(
        "could not select {required} photos from distinct days with the required separation: \
         found {found}"
    )]
    InsufficientDiverseSelection { found: usize, required: usize },
}
