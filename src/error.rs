use thiserror::Error;

/// Errors raised by the speed calculator.
///
/// A weight above the certified maximum is not an error: it is reported as
/// [`crate::Evaluation::OverMaxWeight`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpeedError {
    #[error("invalid takeoff weight {0} lb: must be a finite value greater than zero")]
    InvalidWeight(f64),

    #[error("cannot splice V2 digits from intermediate value {raw}: weight is below the estimation range")]
    MalformedV2Digit { raw: f64 },

    #[error("V2 of {value} knots is outside the representable speed range")]
    V2OutOfRange { value: f64 },

    #[error("unknown aircraft variant '{0}': expected 700 or 800")]
    UnknownVariant(String),
}

pub type Result<T> = std::result::Result<T, SpeedError>;
