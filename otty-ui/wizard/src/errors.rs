use thiserror::Error;

/// Errors emitted while loading or validating wizard settings.
#[derive(Debug, Error)]
pub enum WizardSettingsError {
    /// JSON deserialization failed.
    #[error("wizard settings JSON failed")]
    Json(#[from] serde_json::Error),
    /// A field value did not pass validation.
    #[error("validation error: {message}")]
    Validation { message: String },
}
