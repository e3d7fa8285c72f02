use thiserror::Error;

/// Failure reported by an external search collaborator. Timeouts are mapped
/// to this by the collaborator implementation and treated the same as "no
/// results found".
#[derive(Debug, Error, Clone)]
#[error("provider error: {0}")]
pub struct ProviderError(pub String);

/// Why a single gap could not be filled.
///
/// Every variant is local to one gap: a failing gap never aborts processing
/// of the remaining gaps, and "gap remains unfilled" is always a valid,
/// reportable state.
#[derive(Debug, Error)]
pub enum GapFillError {
    /// A location cannot be resolved well enough to act on.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// An airport or location code is missing; no search was attempted.
    #[error("cannot resolve airport codes: {0}")]
    UnresolvableIdentifier(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The search succeeded but returned nothing usable.
    #[error("no candidates: {0}")]
    NoCandidates(String),

    /// Overnight gaps are intentionally left unfilled.
    #[error("overnight gap left unfilled: {0}")]
    OvernightSuppressed(String),
}
