use thiserror::Error;

/// Errors raised while turning user configuration into app settings.
///
/// Task operations themselves never fail: empty or duplicate names are accepted
/// and unknown ids are no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("invalid filter '{0}' (expected all, active or completed)")]
    InvalidFilter(String),

    #[error("invalid variant '{0}' (expected basic or full)")]
    InvalidVariant(String),

    #[error("invalid appearance '{0}' (expected dark or light)")]
    InvalidAppearance(String),

    #[error("invalid locale: {0}")]
    InvalidLocale(#[from] todo_constant::labels::UnknownLocale),
}

pub type Result<T> = std::result::Result<T, TodoError>;
