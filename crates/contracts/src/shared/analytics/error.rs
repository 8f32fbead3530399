use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuarterError {
    #[error("Malformed fiscal quarter label `{0}`: expected `<year>-<quarter>`")]
    MalformedQuarterLabel(String),
}
