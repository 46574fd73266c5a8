//! Client-side request layer for the payment cryptography data plane.
//!
//! Builders turn a flat bag of caller fields into typed requests for key
//! material translation, MAC generation and verification, AS2805 KEK
//! validation and data encryption. The cryptography itself runs in the
//! service; nothing here touches key material.

pub use config::{BuilderConf, PAYCRYPTO_CONF_ENV, VariantExclusivity};
pub use error::{
    DataPlaneError, FieldIssue,
    result::{DataPlaneResult, DataPlaneResultHelper},
};
pub use fields::{FieldValue, Fields};
pub use invoke::{
    DataPlaneCall, DataPlaneRequest, DataPlaneTransport, invoke, invoke_typed, send_request,
};
pub use select::{DataPlaneResponse, Selector};

pub mod builders;
mod config;
mod error;
mod fields;
mod invoke;
pub mod models;
pub mod presence;
mod select;
