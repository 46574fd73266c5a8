use serde::{Deserialize, Serialize};

use super::enums::{
    KeyCheckValueAlgorithm, KeyDerivationFunction, KeyDerivationHashAlgorithm,
    SymmetricKeyAlgorithm, WrappedKeyMaterialFormat,
};
use crate::presence::{impl_one_of, impl_presence};

/// Shared information fed to the key derivation function
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Default, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DiffieHellmanDerivationData {
    /// Hex encoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_information: Option<String>,
}

/// TR-31 key block wrapped under a key derived by ECDH
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Default, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct IncomingDiffieHellmanTr31KeyBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_authority_public_key_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivation_data: Option<DiffieHellmanDerivationData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derive_key_algorithm: Option<SymmetricKeyAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_derivation_function: Option<KeyDerivationFunction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_derivation_hash_algorithm: Option<KeyDerivationHashAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_identifier: Option<String>,
    /// Base64 encoded certificate of the peer's ECC public key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapped_key_block: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Default, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct IncomingKeyMaterial {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diffie_hellman_tr31_key_block: Option<IncomingDiffieHellmanTr31KeyBlock>,
}

#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Default, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct OutgoingTr31KeyBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapping_key_identifier: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Default, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct OutgoingKeyMaterial {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tr31_key_block: Option<OutgoingTr31KeyBlock>,
}

impl_presence!(
    DiffieHellmanDerivationData => [shared_information];
    IncomingDiffieHellmanTr31KeyBlock => [
        certificate_authority_public_key_identifier,
        derivation_data,
        derive_key_algorithm,
        key_derivation_function,
        key_derivation_hash_algorithm,
        private_key_identifier,
        public_key_certificate,
        wrapped_key_block,
    ];
    OutgoingTr31KeyBlock => [wrapping_key_identifier];
);

impl_one_of!(IncomingKeyMaterial => [diffie_hellman_tr31_key_block: "DiffieHellmanTr31KeyBlock"]);
impl_one_of!(OutgoingKeyMaterial => [tr31_key_block: "Tr31KeyBlock"]);

/// `TranslateKeyMaterial` request: re-wrap a key received under an ECDH
/// derived key so that it is wrapped under a TR-31 key encryption key.
///
/// Neither side is required locally; the service rejects incomplete pairs.
#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Default, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct TranslateKeyMaterialRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoming_key_material: Option<IncomingKeyMaterial>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outgoing_key_material: Option<OutgoingKeyMaterial>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_check_value_algorithm: Option<KeyCheckValueAlgorithm>,
}

#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct WrappedWorkingKey {
    pub key_check_value: String,
    pub key_check_value_algorithm: Option<KeyCheckValueAlgorithm>,
    pub key_material: String,
    pub wrapped_key_material_format: WrappedKeyMaterialFormat,
}

#[derive(Serialize, Deserialize, Clone, Eq, PartialEq, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct TranslateKeyMaterialResponse {
    pub wrapped_key: WrappedWorkingKey,
}
