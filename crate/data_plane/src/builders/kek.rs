use tracing::debug;

use super::check_exclusivity;
use crate::{
    config::BuilderConf,
    error::result::DataPlaneResult,
    fields::{FieldReader, Fields, required},
    models::{
        As2805KekValidationType, GenerateAs2805KekValidationRequest, KekValidationRequest,
        KekValidationResponse, RandomKeySendVariantMask,
    },
    presence::{OneOf, prune},
};

/// Build a `GenerateAs2805KekValidation` request.
///
/// `KeyIdentifier` and `RandomKeySendVariantMask` are required. The
/// validation type is either `KekValidationRequest_DeriveKeyAlgorithm` or
/// `KekValidationResponse_RandomKeySend`.
pub fn build_kek_validation_request(
    fields: &Fields,
    conf: &BuilderConf,
) -> DataPlaneResult<GenerateAs2805KekValidationRequest> {
    let mut reader = FieldReader::new(fields);
    let key_identifier = reader.required_text("KeyIdentifier");
    let random_key_send_variant_mask =
        reader.required_token::<RandomKeySendVariantMask>("RandomKeySendVariantMask");

    let kek_validation_type = prune(As2805KekValidationType {
        kek_validation_request: prune(KekValidationRequest {
            derive_key_algorithm: reader.token("KekValidationRequest_DeriveKeyAlgorithm"),
        }),
        kek_validation_response: prune(KekValidationResponse {
            random_key_send: reader.text("KekValidationResponse_RandomKeySend"),
        }),
    });
    check_exclusivity(kek_validation_type.as_ref(), conf, &mut reader);
    reader.finish(conf)?;

    debug!(
        "GenerateAs2805KekValidation request assembled, validation type: {:?}",
        kek_validation_type
            .as_ref()
            .map(OneOf::populated_variants)
            .unwrap_or_default()
    );
    Ok(GenerateAs2805KekValidationRequest {
        key_identifier: required(key_identifier, "KeyIdentifier")?,
        random_key_send_variant_mask: required(
            random_key_send_variant_mask,
            "RandomKeySendVariantMask",
        )?,
        kek_validation_type,
    })
}
