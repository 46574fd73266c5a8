//! Wire models of the payment cryptography data plane.
//!
//! Members are serialised in `PascalCase` and absent optional members are
//! left out of the payload entirely.

mod encrypt;
mod enums;
mod kek;
mod mac;
mod translate;

pub use encrypt::{
    AsymmetricEncryptionAttributes, DukptEncryptionAttributes, EncryptDataRequest,
    EncryptDataResponse, EncryptionDecryptionAttributes, SymmetricEncryptionAttributes,
};
pub use enums::{
    DukptDerivationType, DukptEncryptionMode, DukptKeyVariant, EncryptionMode,
    KeyCheckValueAlgorithm, KeyDerivationFunction, KeyDerivationHashAlgorithm, MacAlgorithm,
    MajorKeyDerivationMode, PaddingType, RandomKeySendVariantMask, ServiceToken,
    SessionKeyDerivationMode, SymmetricKeyAlgorithm, WrappedKeyMaterialFormat,
};
pub use kek::{
    As2805KekValidationType, GenerateAs2805KekValidationRequest,
    GenerateAs2805KekValidationResponse, KekValidationRequest, KekValidationResponse,
};
pub use mac::{
    GenerateMacRequest, GenerateMacResponse, MacAlgorithmDukpt, MacAlgorithmEmv, MacAttributes,
    SessionKeyDerivationValue, VerifyMacRequest, VerifyMacResponse,
};
pub use translate::{
    DiffieHellmanDerivationData, IncomingDiffieHellmanTr31KeyBlock, IncomingKeyMaterial,
    OutgoingKeyMaterial, OutgoingTr31KeyBlock, TranslateKeyMaterialRequest,
    TranslateKeyMaterialResponse, WrappedWorkingKey,
};
