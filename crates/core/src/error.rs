use thiserror::Error;

/// Terminal wizard failures. The display strings are the exact one-line
/// diagnostics shown to the operator; a failed selection ends the run, it
/// is never re-prompted.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Invalid device type.")]
    InvalidDeviceType,

    #[error("Invalid sensor class.")]
    InvalidSensorClass,

    #[error("Invalid binary sensor class.")]
    InvalidBinarySensorClass,

    #[error("Invalid button class.")]
    InvalidButtonClass,

    #[error("Invalid unit of measurement.")]
    InvalidUnit,

    #[error("Invalid state.")]
    InvalidState,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
