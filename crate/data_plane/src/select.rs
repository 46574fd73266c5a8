//! Projection of a service response.
//!
//! Callers choose what they get back from an invocation: the whole response
//! (`*`) or a single top-level member (`Mac`, `CipherText`, ...). When they
//! do not choose, the response type's documented default applies; there is
//! no process-wide default to mutate.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::{DataPlaneError, result::DataPlaneResult};

/// What to return from a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// The whole response, written `*`
    Whole,
    /// One top-level member, by wire name
    Property(String),
}

impl FromStr for Selector {
    type Err = DataPlaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "*" => Ok(Self::Whole),
            "" => Err(DataPlaneError::UnknownProperty(String::new())),
            name => Ok(Self::Property(name.to_owned())),
        }
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole => write!(f, "*"),
            Self::Property(name) => write!(f, "{name}"),
        }
    }
}

impl Selector {
    /// Apply the selector to a response.
    ///
    /// Optional members the service left out select as `null`; a name that is
    /// not a member of the response is an error.
    pub fn apply<R: Serialize>(&self, response: &R) -> DataPlaneResult<Value> {
        let value = serde_json::to_value(response)?;
        match self {
            Self::Whole => Ok(value),
            Self::Property(name) => value
                .get(name)
                .cloned()
                .ok_or_else(|| DataPlaneError::UnknownProperty(name.clone())),
        }
    }
}

/// A response of the data plane, with the selection applied when the caller
/// gives none.
pub trait DataPlaneResponse: Serialize + DeserializeOwned {
    const DEFAULT_SELECTOR: &'static str;

    fn default_selector() -> Selector {
        if Self::DEFAULT_SELECTOR == "*" {
            Selector::Whole
        } else {
            Selector::Property(Self::DEFAULT_SELECTOR.to_owned())
        }
    }
}
