use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentiPulseError {
    /// Network or parse failure while retrieving content. Fetch failures
    /// degrade to empty content at the call site; they never abort a run.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The contextual model returned a tag that is not in the canonical
    /// mapping table. Raised, never defaulted: the deployed model no longer
    /// matches the one this pipeline was built against.
    #[error("Unknown classifier label: {0:?}")]
    UnknownLabel(String),

    /// The contextual model service failed (HTTP error, malformed response,
    /// empty prediction set). Fatal at startup; per-item mid-run.
    #[error("Classifier error: {0}")]
    Classifier(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
