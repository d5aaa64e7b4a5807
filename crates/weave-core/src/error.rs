use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// An input parameter is outside its stated domain. Raised at entry
    /// points before any computation starts; never silently clamped.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The generated graph came out disconnected. Possible outcome of
    /// random rewiring on few-node graphs, surfaced only by the explicit
    /// connectivity check.
    #[error("degenerate graph: {components} disconnected components")]
    DegenerateGraph { components: usize },
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
