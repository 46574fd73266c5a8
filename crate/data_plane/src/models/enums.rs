//! String enumerations of the payment cryptography data plane.
//!
//! Variant names are the wire tokens, so `Display`, `FromStr` and serde all
//! agree on the same spelling. The service owns these sets: a token missing
//! from a list below is carried in `Unknown` and left for the service to
//! judge.
#![allow(non_camel_case_types)]

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A service enumeration read from caller text.
pub trait ServiceToken: Sized {
    /// Parse `token`, keeping unlisted spellings as they are.
    fn from_token(token: &str) -> Self;

    /// Whether the token is one this client lists.
    fn is_known(&self) -> bool;
}

macro_rules! impl_service_token {
    ($($name:ident),+ $(,)?) => {
        $(
            impl ServiceToken for $name {
                fn from_token(token: &str) -> Self {
                    Self::from_str(token).unwrap_or_else(|_| Self::Unknown(token.to_owned()))
                }

                fn is_known(&self) -> bool {
                    !matches!(self, Self::Unknown(_))
                }
            }
        )+
    };
}

/// MAC algorithm used for generation and verification
#[derive(Debug, Display, Serialize, Deserialize, EnumString, Clone, PartialEq, Eq, Hash)]
pub enum MacAlgorithm {
    ISO9797_ALGORITHM1,
    ISO9797_ALGORITHM3,
    CMAC,
    HMAC,
    HMAC_SHA224,
    HMAC_SHA256,
    HMAC_SHA384,
    HMAC_SHA512,
    AS2805_4_1,
    /// A token this client does not list, sent or read as is
    #[strum(default)]
    #[serde(untagged)]
    Unknown(String),
}

/// Key type of the DUKPT base derivation key
#[derive(Debug, Display, Serialize, Deserialize, EnumString, Clone, PartialEq, Eq, Hash)]
pub enum DukptDerivationType {
    TDES_2KEY,
    TDES_3KEY,
    AES_128,
    AES_192,
    AES_256,
    #[strum(default)]
    #[serde(untagged)]
    Unknown(String),
}

/// Direction of the DUKPT working key
#[derive(Debug, Display, Serialize, Deserialize, EnumString, Clone, PartialEq, Eq, Hash)]
pub enum DukptKeyVariant {
    BIDIRECTIONAL,
    REQUEST,
    RESPONSE,
    #[strum(default)]
    #[serde(untagged)]
    Unknown(String),
}

/// EMV derivation of the ICC master key
#[derive(Debug, Display, Serialize, Deserialize, EnumString, Clone, PartialEq, Eq, Hash)]
pub enum MajorKeyDerivationMode {
    EMV_OPTION_A,
    EMV_OPTION_B,
    #[strum(default)]
    #[serde(untagged)]
    Unknown(String),
}

/// EMV derivation of the MAC session key
#[derive(Debug, Display, Serialize, Deserialize, EnumString, Clone, PartialEq, Eq, Hash)]
pub enum SessionKeyDerivationMode {
    EMV_COMMON_SESSION_KEY,
    EMV2000,
    AMEX,
    MASTERCARD_SESSION_KEY,
    VISA,
    #[strum(default)]
    #[serde(untagged)]
    Unknown(String),
}

/// Block cipher mode for symmetric encryption.
///
/// The service defaults to `CBC` when the mode is omitted.
#[derive(Debug, Display, Serialize, Deserialize, EnumString, Clone, PartialEq, Eq, Hash)]
pub enum EncryptionMode {
    ECB,
    CBC,
    CFB,
    CFB1,
    CFB8,
    CFB64,
    CFB128,
    OFB,
    #[strum(default)]
    #[serde(untagged)]
    Unknown(String),
}

/// Block cipher mode for DUKPT encryption
#[derive(Debug, Display, Serialize, Deserialize, EnumString, Clone, PartialEq, Eq, Hash)]
pub enum DukptEncryptionMode {
    ECB,
    CBC,
    #[strum(default)]
    #[serde(untagged)]
    Unknown(String),
}

/// Padding scheme shared by symmetric and asymmetric encryption
#[derive(Debug, Display, Serialize, Deserialize, EnumString, Clone, PartialEq, Eq, Hash)]
pub enum PaddingType {
    PKCS1,
    OAEP_SHA1,
    OAEP_SHA256,
    OAEP_SHA512,
    #[strum(default)]
    #[serde(untagged)]
    Unknown(String),
}

/// Algorithm used to compute a key check value
#[derive(Debug, Display, Serialize, Deserialize, EnumString, Clone, PartialEq, Eq, Hash)]
pub enum KeyCheckValueAlgorithm {
    CMAC,
    ANSI_X9_24,
    HMAC,
    SHA_1,
    #[strum(default)]
    #[serde(untagged)]
    Unknown(String),
}

/// Algorithm of a symmetric key derived or validated by the service
#[derive(Debug, Display, Serialize, Deserialize, EnumString, Clone, PartialEq, Eq, Hash)]
pub enum SymmetricKeyAlgorithm {
    TDES_2KEY,
    TDES_3KEY,
    AES_128,
    AES_192,
    AES_256,
    HMAC_SHA224,
    HMAC_SHA256,
    HMAC_SHA384,
    HMAC_SHA512,
    #[strum(default)]
    #[serde(untagged)]
    Unknown(String),
}

/// Key derivation function applied to the ECDH shared secret
#[derive(Debug, Display, Serialize, Deserialize, EnumString, Clone, PartialEq, Eq, Hash)]
pub enum KeyDerivationFunction {
    NIST_SP800,
    ANSI_X963,
    #[strum(default)]
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Display, Serialize, Deserialize, EnumString, Clone, PartialEq, Eq, Hash)]
pub enum KeyDerivationHashAlgorithm {
    SHA_256,
    SHA_384,
    SHA_512,
    #[strum(default)]
    #[serde(untagged)]
    Unknown(String),
}

/// Format of the key material returned by a translation
#[derive(Debug, Display, Serialize, Deserialize, EnumString, Clone, PartialEq, Eq, Hash)]
pub enum WrappedKeyMaterialFormat {
    KEY_CRYPTOGRAM,
    TR31_KEY_BLOCK,
    TR34_KEY_BLOCK,
    #[strum(default)]
    #[serde(untagged)]
    Unknown(String),
}

/// AS2805 variant mask applied to the random key sent to the peer
#[derive(Debug, Display, Serialize, Deserialize, EnumString, Clone, PartialEq, Eq, Hash)]
pub enum RandomKeySendVariantMask {
    VARIANT_MASK_82C0,
    VARIANT_MASK_82,
    #[strum(default)]
    #[serde(untagged)]
    Unknown(String),
}

impl_service_token!(
    MacAlgorithm,
    DukptDerivationType,
    DukptKeyVariant,
    MajorKeyDerivationMode,
    SessionKeyDerivationMode,
    EncryptionMode,
    DukptEncryptionMode,
    PaddingType,
    KeyCheckValueAlgorithm,
    SymmetricKeyAlgorithm,
    KeyDerivationFunction,
    KeyDerivationHashAlgorithm,
    WrappedKeyMaterialFormat,
    RandomKeySendVariantMask,
);
