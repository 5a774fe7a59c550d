// ==========================================
// Course Planner - resolver error types
// ==========================================

use thiserror::Error;

/// Per-endpoint failures inside the interest resolver. These never cross
/// the resolver boundary: total failure surfaces to callers as an empty
/// candidate list.
#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("http client build failed: {0}")]
    ClientBuild(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("service returned status {status}: {url}")]
    ServiceStatus { url: String, status: u16 },

    #[error("malformed interest response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result alias for the resolver layer.
pub type ResolverResult<T> = Result<T, ResolverError>;
