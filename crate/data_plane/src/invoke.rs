//! Hand a built request to a transport and project what comes back.
//!
//! The transport (signing, HTTP, retries) is supplied by the caller. Its
//! errors are passed through untouched as the source of
//! [`DataPlaneError::Transport`].

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    error::{
        DataPlaneError,
        result::{DataPlaneResult, DataPlaneResultHelper},
    },
    models::{
        EncryptDataRequest, EncryptDataResponse, GenerateAs2805KekValidationRequest,
        GenerateAs2805KekValidationResponse, GenerateMacRequest, GenerateMacResponse,
        TranslateKeyMaterialRequest, TranslateKeyMaterialResponse, VerifyMacRequest,
        VerifyMacResponse,
    },
    select::{DataPlaneResponse, Selector},
};

/// A request of the data plane and where it goes
pub trait DataPlaneRequest: Serialize {
    type Response: DataPlaneResponse;

    /// Service operation name
    const OPERATION: &'static str;
    const METHOD: &'static str = "POST";

    /// Request path, with path parameters percent-encoded
    fn path(&self) -> String;
}

/// One call as seen by the transport.
///
/// The body may carry plaintext: its strings are wiped when the call is
/// dropped. Copies the transport makes of it (encoded bytes, buffers) are
/// the transport's to wipe.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPlaneCall {
    pub operation: &'static str,
    pub method: &'static str,
    pub path: String,
    pub body: Value,
}

fn zeroize_value(value: &mut Value) {
    match value {
        Value::String(s) => s.zeroize(),
        Value::Array(items) => items.iter_mut().for_each(zeroize_value),
        Value::Object(members) => members.values_mut().for_each(zeroize_value),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

impl Zeroize for DataPlaneCall {
    fn zeroize(&mut self) {
        zeroize_value(&mut self.body);
    }
}

impl Drop for DataPlaneCall {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for DataPlaneCall {}

pub trait DataPlaneTransport {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send one call and return the decoded JSON body of the response
    fn send(&self, call: DataPlaneCall) -> Result<Value, Self::Error>;
}

impl DataPlaneRequest for GenerateMacRequest {
    type Response = GenerateMacResponse;

    const OPERATION: &'static str = "GenerateMac";

    fn path(&self) -> String {
        "/mac/generate".to_owned()
    }
}

impl DataPlaneRequest for VerifyMacRequest {
    type Response = VerifyMacResponse;

    const OPERATION: &'static str = "VerifyMac";

    fn path(&self) -> String {
        "/mac/verify".to_owned()
    }
}

impl DataPlaneRequest for EncryptDataRequest {
    type Response = EncryptDataResponse;

    const OPERATION: &'static str = "EncryptData";

    fn path(&self) -> String {
        format!(
            "/keys/{}/encrypt",
            urlencoding::encode(&self.key_identifier)
        )
    }
}

impl DataPlaneRequest for TranslateKeyMaterialRequest {
    type Response = TranslateKeyMaterialResponse;

    const OPERATION: &'static str = "TranslateKeyMaterial";

    fn path(&self) -> String {
        "/keymaterial/translate".to_owned()
    }
}

impl DataPlaneRequest for GenerateAs2805KekValidationRequest {
    type Response = GenerateAs2805KekValidationResponse;

    const OPERATION: &'static str = "GenerateAs2805KekValidation";

    fn path(&self) -> String {
        "/as2805kekvalidation/generate".to_owned()
    }
}

impl DataPlaneResponse for GenerateMacResponse {
    const DEFAULT_SELECTOR: &'static str = "*";
}

impl DataPlaneResponse for VerifyMacResponse {
    const DEFAULT_SELECTOR: &'static str = "*";
}

impl DataPlaneResponse for EncryptDataResponse {
    const DEFAULT_SELECTOR: &'static str = "*";
}

impl DataPlaneResponse for TranslateKeyMaterialResponse {
    const DEFAULT_SELECTOR: &'static str = "WrappedKey";
}

impl DataPlaneResponse for GenerateAs2805KekValidationResponse {
    const DEFAULT_SELECTOR: &'static str = "*";
}

/// Send `request` once and return the typed response.
pub fn send_request<T, R>(transport: &T, request: &R) -> DataPlaneResult<R::Response>
where
    T: DataPlaneTransport,
    R: DataPlaneRequest,
{
    let call = DataPlaneCall {
        operation: R::OPERATION,
        method: R::METHOD,
        path: request.path(),
        body: serde_json::to_value(request)
            .with_context(|| format!("failed serializing the {} request", R::OPERATION))?,
    };
    debug!("{} {} ({})", call.method, call.path, call.operation);
    let body = transport
        .send(call)
        .map_err(|e| DataPlaneError::Transport(Box::new(e)))?;
    trace!("{} response received", R::OPERATION);
    serde_json::from_value(body)
        .with_context(|| format!("failed deserializing the {} response", R::OPERATION))
}

/// Send `request` and project the response through `selector`, or through the
/// response type's default selector when `None`.
pub fn invoke<T, R>(
    transport: &T,
    request: &R,
    selector: Option<&Selector>,
) -> DataPlaneResult<Value>
where
    T: DataPlaneTransport,
    R: DataPlaneRequest,
{
    let response = send_request(transport, request)?;
    match selector {
        Some(selector) => selector.apply(&response),
        None => <R::Response as DataPlaneResponse>::default_selector().apply(&response),
    }
}

/// Send `request` and project the typed response with `projection`.
pub fn invoke_typed<T, R, O, F>(transport: &T, request: &R, projection: F) -> DataPlaneResult<O>
where
    T: DataPlaneTransport,
    R: DataPlaneRequest,
    F: FnOnce(R::Response) -> O,
{
    send_request(transport, request).map(projection)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use serde_json::json;
    use zeroize::{Zeroize, Zeroizing};

    use super::{DataPlaneCall, DataPlaneRequest};
    use crate::models::EncryptDataRequest;

    #[test]
    fn key_arn_is_a_single_path_segment() {
        let request = EncryptDataRequest {
            key_identifier: "arn:aws:payment-cryptography:us-east-2:111122223333:key/kwapwa6qaifllw2h"
                .to_owned(),
            plain_text: Zeroizing::new("31323334".to_owned()),
            encryption_attributes: None,
        };
        let path = request.path();
        assert_eq!(
            path,
            "/keys/arn%3Aaws%3Apayment-cryptography%3Aus-east-2%3A111122223333%3Akey%2Fkwapwa6qaifllw2h/encrypt"
        );
        assert_eq!(path.matches('/').count(), 3);
    }

    #[test]
    fn call_body_strings_are_wiped() {
        let mut call = DataPlaneCall {
            operation: "EncryptData",
            method: "POST",
            path: "/keys/k/encrypt".to_owned(),
            body: json!({
                "PlainText": "31323334",
                "EncryptionAttributes": { "Dukpt": { "KeySerialNumber": "FFFF9876543210E00001" } },
                "Tags": ["a", 2]
            }),
        };
        call.zeroize();
        assert_eq!(
            call.body,
            json!({
                "PlainText": "",
                "EncryptionAttributes": { "Dukpt": { "KeySerialNumber": "" } },
                "Tags": ["", 2]
            })
        );
    }
}
