use derive_more::{Display, Error};

pub type Result<T> = core::result::Result<T, OracleError>;

/// Why a query or a surface was rejected before any search took place
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryIssue {
    #[display("a query point has a NaN or infinite coordinate")]
    NonFiniteQuery,
    #[display("a ray or line has a zero or non finite direction")]
    ZeroDirection,
    #[display("the bounding sphere center has a NaN or infinite coordinate")]
    NonFiniteCenter,
    #[display("the bounding sphere squared radius is not finite and positive")]
    InvalidRadius,
    #[display("the squared error bound is not finite and positive")]
    InvalidErrorBound,
}

/// "No intersection" is not an error: it is `Ok(None)`
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum OracleError {
    #[display("invalid geometry: {_0}")]
    InvalidGeometry(#[error(not(source))] GeometryIssue),
    #[display("sampling exhausted after {attempts} attempts: found {found} of {requested} points")]
    SamplingExhausted {
        requested: usize,
        found: usize,
        attempts: usize,
    },
}

impl From<GeometryIssue> for OracleError {
    fn from(issue: GeometryIssue) -> Self {
        OracleError::InvalidGeometry(issue)
    }
}
