//! The flat bag of caller-supplied fields a request is built from.
//!
//! Field names follow the command wrapper parameter surface: top-level members
//! keep their wire name (`KeyIdentifier`), nested members are prefixed by the
//! group they belong to (`DukptCmac_DukptKeyVariant`).

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{self, Display, Formatter},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    config::BuilderConf,
    error::{DataPlaneError, FieldIssue, result::DataPlaneResult},
    models::ServiceToken,
};

/// A scalar supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Caller-supplied fields, keyed by parameter name.
///
/// A name that is not in the bag is an absent field. An empty string is a
/// supplied field: whether it is acceptable is for the service to decide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Fields {
    values: BTreeMap<String, FieldValue>,
}

impl Fields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.values.insert(name.to_owned(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.values.remove(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Read the fields from a flat JSON object; `null` members are absent.
    pub fn from_json_str(json: &str) -> DataPlaneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for Fields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Option<FieldValue>>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect())
    }
}

/// Reads fields for one build, collecting every problem instead of failing
/// on the first one.
pub(crate) struct FieldReader<'a> {
    fields: &'a Fields,
    consumed: BTreeSet<&'static str>,
    issues: Vec<FieldIssue>,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(fields: &'a Fields) -> Self {
        Self {
            fields,
            consumed: BTreeSet::new(),
            issues: Vec::new(),
        }
    }

    fn lookup(&mut self, name: &'static str) -> Option<&'a FieldValue> {
        self.consumed.insert(name);
        let fields: &'a Fields = self.fields;
        fields.get(name)
    }

    pub(crate) fn text(&mut self, name: &'static str) -> Option<String> {
        self.lookup(name).map(ToString::to_string)
    }

    pub(crate) fn required_text(&mut self, name: &'static str) -> Option<String> {
        let value = self.text(name);
        if value.is_none() {
            self.issues
                .push(FieldIssue::MissingRequiredField(name.to_owned()));
        }
        value
    }

    /// Read an enumerated token. Unlisted tokens are kept as given.
    pub(crate) fn token<E: ServiceToken>(&mut self, name: &'static str) -> Option<E> {
        let token = E::from_token(&self.lookup(name)?.to_string());
        if !token.is_known() {
            debug!("{name} carries a token this client does not list, passing it through");
        }
        Some(token)
    }

    pub(crate) fn required_token<E: ServiceToken>(&mut self, name: &'static str) -> Option<E> {
        let token = self.token(name);
        if token.is_none() {
            self.issues
                .push(FieldIssue::MissingRequiredField(name.to_owned()));
        }
        token
    }

    pub(crate) fn integer_i32(&mut self, name: &'static str) -> Option<i32> {
        let parsed = match self.lookup(name)? {
            FieldValue::Integer(i) => i32::try_from(*i).map_err(|e| e.to_string()),
            FieldValue::Text(s) => s.trim().parse::<i32>().map_err(|e| e.to_string()),
        };
        match parsed {
            Ok(i) => Some(i),
            Err(reason) => {
                self.issues.push(FieldIssue::InvalidFieldValue {
                    field: name.to_owned(),
                    reason,
                });
                None
            }
        }
    }

    pub(crate) fn push_issue(&mut self, issue: FieldIssue) {
        self.issues.push(issue);
    }

    /// Close the read: flag unread names and turn the collected issues into
    /// an error, if any.
    pub(crate) fn finish(mut self, conf: &BuilderConf) -> DataPlaneResult<()> {
        if conf.reject_unknown_fields {
            let unknown: Vec<FieldIssue> = self
                .fields
                .names()
                .filter(|name| !self.consumed.contains(*name))
                .map(|name| FieldIssue::UnknownField(name.to_owned()))
                .collect();
            self.issues.extend(unknown);
        }
        DataPlaneError::from_issues(self.issues).map_or(Ok(()), Err)
    }
}

/// Unwrap a required value after [`FieldReader::finish`] has vouched for it.
pub(crate) fn required<T>(value: Option<T>, name: &str) -> DataPlaneResult<T> {
    value.ok_or_else(|| DataPlaneError::MissingRequiredField(name.to_owned()))
}
