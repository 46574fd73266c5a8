use serde::{Deserialize, Serialize};

use super::enums::{RandomKeySendVariantMask, SymmetricKeyAlgorithm};
use crate::presence::{impl_one_of, impl_presence};

/// Ask the service to generate a random key to send to the AS2805 peer
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Default, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct KekValidationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derive_key_algorithm: Option<SymmetricKeyAlgorithm>,
}

/// Answer a random key received from the AS2805 peer
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Default, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct KekValidationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_key_send: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Default, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct As2805KekValidationType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kek_validation_request: Option<KekValidationRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kek_validation_response: Option<KekValidationResponse>,
}

impl_presence!(
    KekValidationRequest => [derive_key_algorithm];
    KekValidationResponse => [random_key_send];
);

impl_one_of!(As2805KekValidationType => [
    kek_validation_request: "KekValidationRequest",
    kek_validation_response: "KekValidationResponse",
]);

/// `GenerateAs2805KekValidation` request
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateAs2805KekValidationRequest {
    pub key_identifier: String,
    pub random_key_send_variant_mask: RandomKeySendVariantMask,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kek_validation_type: Option<As2805KekValidationType>,
}

#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateAs2805KekValidationResponse {
    pub key_arn: String,
    pub key_check_value: String,
    pub random_key_receive: String,
    pub random_key_send: String,
}
