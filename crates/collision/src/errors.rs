#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CircleError {
    #[error("Attempted to create a circle with a negative radius")]
    NegativeRadius,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Circle error: {0}")]
    Circle(#[from] CircleError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
