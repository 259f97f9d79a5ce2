#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A local-only summary was asked to produce a wire message.
    #[error("{summary} should not be transported over the wire")]
    NotTransportable { summary: &'static str },

    #[error("Unknown thermal dimension: {0}")]
    UnknownDimension(String),
}
