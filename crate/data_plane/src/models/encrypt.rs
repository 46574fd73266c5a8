use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::enums::{
    DukptDerivationType, DukptEncryptionMode, DukptKeyVariant, EncryptionMode, PaddingType,
};
use crate::presence::{impl_one_of, impl_presence};

/// Symmetric block cipher parameters.
///
/// An absent `mode` is sent as absent; the service applies `CBC`.
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Default, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct SymmetricEncryptionAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<EncryptionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_type: Option<PaddingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initialization_vector: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Default, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct AsymmetricEncryptionAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_type: Option<PaddingType>,
}

#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Default, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DukptEncryptionAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dukpt_key_derivation_type: Option<DukptDerivationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dukpt_key_variant: Option<DukptKeyVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<DukptEncryptionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initialization_vector: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Default, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct EncryptionDecryptionAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symmetric: Option<SymmetricEncryptionAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asymmetric: Option<AsymmetricEncryptionAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dukpt: Option<DukptEncryptionAttributes>,
}

impl_presence!(
    SymmetricEncryptionAttributes => [mode, padding_type, initialization_vector];
    AsymmetricEncryptionAttributes => [padding_type];
    DukptEncryptionAttributes => [
        dukpt_key_derivation_type,
        dukpt_key_variant,
        key_serial_number,
        mode,
        initialization_vector,
    ];
);

impl_one_of!(EncryptionDecryptionAttributes => [
    symmetric: "Symmetric",
    asymmetric: "Asymmetric",
    dukpt: "Dukpt",
]);

/// `EncryptData` request.
///
/// The key identifier travels in the request path, not in the body.
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct EncryptDataRequest {
    #[serde(default, skip_serializing)]
    pub key_identifier: String,
    /// Hex encoded plaintext, wiped on drop
    pub plain_text: Zeroizing<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_attributes: Option<EncryptionDecryptionAttributes>,
}

#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct EncryptDataResponse {
    pub key_arn: String,
    pub key_check_value: Option<String>,
    pub cipher_text: String,
}
