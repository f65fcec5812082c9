//! Input validation errors.

/// Error returned when a numeric answer cannot be used.
///
/// The `Display` text is the message shown to the user after `Error: `.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The term count was not a number, or was zero or negative.
    #[error("Please enter a positive integer.")]
    NotPositive,

    /// The maximum value was not a number, or was negative.
    #[error("Please enter a non-negative value.")]
    Negative,
}
