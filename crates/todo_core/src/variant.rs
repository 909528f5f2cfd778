//! App variants: the first tutorial stage (basic) and the finished app (full).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TodoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppVariant {
    /// Input, add button and task rows only.
    Basic,
    /// Adds filter tabs, the remaining counter and clear-completed.
    #[default]
    Full,
}

impl AppVariant {
    /// Filter tabs, counter and clear-completed are available.
    pub fn has_filters(self) -> bool {
        matches!(self, AppVariant::Full)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppVariant::Basic => "basic",
            AppVariant::Full => "full",
        }
    }
}

impl fmt::Display for AppVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppVariant {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "before" => Ok(AppVariant::Basic),
            "full" | "after" => Ok(AppVariant::Full),
            other => Err(TodoError::InvalidVariant(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_full() {
        assert_eq!(AppVariant::default(), AppVariant::Full);
        assert!(AppVariant::Full.has_filters());
        assert!(!AppVariant::Basic.has_filters());
    }

    #[test]
    fn parse_variant() {
        assert_eq!("BASIC".parse::<AppVariant>().unwrap(), AppVariant::Basic);
        assert_eq!("after".parse::<AppVariant>().unwrap(), AppVariant::Full);
        assert!("mini".parse::<AppVariant>().is_err());
    }
}
