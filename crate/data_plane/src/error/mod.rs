use std::fmt::{self, Display, Formatter};

use thiserror::Error;

pub(crate) mod result;

/// A single problem found while reading the caller's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    MissingRequiredField(String),
    InvalidFieldValue { field: String, reason: String },
    UnknownField(String),
    ConflictingVariants { group: String, variants: Vec<String> },
}

impl Display for FieldIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequiredField(name) => write!(f, "missing required field: {name}"),
            Self::InvalidFieldValue { field, reason } => {
                write!(f, "invalid value for {field}: {reason}")
            }
            Self::UnknownField(name) => write!(f, "unknown field: {name}"),
            Self::ConflictingVariants { group, variants } => write!(
                f,
                "only one of the {group} variants may be set, got: {}",
                variants.join(", ")
            ),
        }
    }
}

#[derive(Error, Debug)]
pub enum DataPlaneError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Validation failed: {}", join_issues(.0))]
    ValidationAggregate(Vec<FieldIssue>),

    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Unknown response property: {0}")]
    UnknownProperty(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    Default(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl DataPlaneError {
    /// Collapse the issues collected during a build into an error.
    ///
    /// A lone missing field is reported bare; anything else is aggregated.
    pub(crate) fn from_issues(issues: Vec<FieldIssue>) -> Option<Self> {
        if issues.is_empty() {
            return None
        }
        if let [FieldIssue::MissingRequiredField(name)] = issues.as_slice() {
            return Some(Self::MissingRequiredField(name.clone()))
        }
        Some(Self::ValidationAggregate(issues))
    }

    /// The field issues carried by this error, whichever form it takes.
    #[must_use]
    pub fn issues(&self) -> Vec<FieldIssue> {
        match self {
            Self::MissingRequiredField(name) => {
                vec![FieldIssue::MissingRequiredField(name.clone())]
            }
            Self::ValidationAggregate(issues) => issues.clone(),
            _ => Vec::new(),
        }
    }

    /// Names of the missing required fields, in the order they were checked.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<String> {
        self.issues()
            .into_iter()
            .filter_map(|issue| match issue {
                FieldIssue::MissingRequiredField(name) => Some(name),
                _ => None,
            })
            .collect()
    }
}

/// Return early with a [`DataPlaneError::Default`] built from a format string.
#[macro_export]
macro_rules! data_plane_bail {
    ($msg:literal) => {
        return ::core::result::Result::Err($crate::DataPlaneError::Default(::core::format_args!($msg).to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return ::core::result::Result::Err($crate::DataPlaneError::Default(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::{DataPlaneError, FieldIssue};

    #[test]
    fn lone_missing_field_is_reported_bare() {
        let err = DataPlaneError::from_issues(vec![FieldIssue::MissingRequiredField(
            "KeyIdentifier".to_owned(),
        )])
        .unwrap();
        assert!(matches!(&err, DataPlaneError::MissingRequiredField(n) if n == "KeyIdentifier"));
        assert_eq!(err.to_string(), "Missing required field: KeyIdentifier");
    }

    #[test]
    fn several_issues_are_aggregated() {
        let err = DataPlaneError::from_issues(vec![
            FieldIssue::MissingRequiredField("KeyIdentifier".to_owned()),
            FieldIssue::UnknownField("Foo".to_owned()),
            FieldIssue::MissingRequiredField("MessageData".to_owned()),
        ])
        .unwrap();
        assert_eq!(err.missing_fields(), vec!["KeyIdentifier", "MessageData"]);
        assert_eq!(
            err.to_string(),
            "Validation failed: missing required field: KeyIdentifier; unknown field: Foo; \
             missing required field: MessageData"
        );
    }

    #[test]
    fn no_issue_no_error() {
        assert!(DataPlaneError::from_issues(Vec::new()).is_none());
    }
}
