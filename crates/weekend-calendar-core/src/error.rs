use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeekendError {
    /// The month (or year) around the given date cannot be represented.
    #[error("the passed date is invalid")]
    InvalidDate,
}
