use serde::{Deserialize, Serialize};

use super::enums::{
    DukptDerivationType, DukptKeyVariant, MacAlgorithm, MajorKeyDerivationMode,
    SessionKeyDerivationMode,
};
use crate::presence::{impl_one_of, impl_presence};

/// DUKPT parameters shared by the CMAC and ISO 9797 MAC variants
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Default, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct MacAlgorithmDukpt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dukpt_derivation_type: Option<DukptDerivationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dukpt_key_variant: Option<DukptKeyVariant>,
    /// Hex encoded key serial number of the transaction originating device
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_serial_number: Option<String>,
}

/// Data the EMV session key is derived from
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Default, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct SessionKeyDerivationValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_cryptogram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_transaction_counter: Option<String>,
}

/// EMV MAC parameters
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Default, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct MacAlgorithmEmv {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_key_derivation_mode: Option<MajorKeyDerivationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_sequence_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_key_derivation_mode: Option<SessionKeyDerivationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_key_derivation_value: Option<SessionKeyDerivationValue>,
}

/// Attributes of a MAC generation or verification.
///
/// At most one of the DUKPT and EMV variants is accepted by the service.
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Default, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct MacAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<MacAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dukpt_cmac: Option<MacAlgorithmDukpt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dukpt_iso9797_algorithm1: Option<MacAlgorithmDukpt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dukpt_iso9797_algorithm3: Option<MacAlgorithmDukpt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emv_mac: Option<MacAlgorithmEmv>,
}

impl_presence!(
    MacAlgorithmDukpt => [dukpt_derivation_type, dukpt_key_variant, key_serial_number];
    SessionKeyDerivationValue => [application_cryptogram, application_transaction_counter];
    MacAlgorithmEmv => [
        major_key_derivation_mode,
        pan_sequence_number,
        primary_account_number,
        session_key_derivation_mode,
        session_key_derivation_value,
    ];
);

impl_one_of!(MacAttributes => [
    dukpt_cmac: "DukptCmac",
    dukpt_iso9797_algorithm1: "DukptIso9797Algorithm1",
    dukpt_iso9797_algorithm3: "DukptIso9797Algorithm3",
    emv_mac: "EmvMac",
] + [algorithm]);

/// `GenerateMac` request
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateMacRequest {
    pub key_identifier: String,
    /// Hex encoded data to MAC
    pub message_data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_attributes: Option<MacAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_length: Option<i32>,
}

/// `VerifyMac` request
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyMacRequest {
    pub key_identifier: String,
    pub message_data: String,
    /// Hex encoded MAC to check
    pub mac: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_attributes: Option<MacAttributes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_length: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateMacResponse {
    pub key_arn: String,
    pub key_check_value: String,
    pub mac: String,
}

#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyMacResponse {
    pub key_arn: String,
    pub key_check_value: String,
}
