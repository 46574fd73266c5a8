use tracing::debug;
use zeroize::Zeroizing;

use super::check_exclusivity;
use crate::{
    config::BuilderConf,
    error::result::DataPlaneResult,
    fields::{FieldReader, Fields, required},
    models::{
        AsymmetricEncryptionAttributes, DukptEncryptionAttributes, EncryptDataRequest,
        EncryptionDecryptionAttributes, SymmetricEncryptionAttributes,
    },
    presence::{OneOf, prune},
};

/// Build an `EncryptData` request.
///
/// `KeyIdentifier` and `PlainText` are required. The encryption attributes
/// come from the `Symmetric_*`, `Asymmetric_*` and `Dukpt_*` groups; an
/// unset mode stays unset.
pub fn build_encrypt_request(
    fields: &Fields,
    conf: &BuilderConf,
) -> DataPlaneResult<EncryptDataRequest> {
    let mut reader = FieldReader::new(fields);
    let key_identifier = reader.required_text("KeyIdentifier");
    let plain_text = reader.required_text("PlainText").map(Zeroizing::new);

    let symmetric = prune(SymmetricEncryptionAttributes {
        mode: reader.token("Symmetric_Mode"),
        padding_type: reader.token("Symmetric_PaddingType"),
        initialization_vector: reader.text("Symmetric_InitializationVector"),
    });
    let asymmetric = prune(AsymmetricEncryptionAttributes {
        padding_type: reader.token("Asymmetric_PaddingType"),
    });
    let dukpt = prune(DukptEncryptionAttributes {
        dukpt_key_derivation_type: reader.token("Dukpt_DukptKeyDerivationType"),
        dukpt_key_variant: reader.token("Dukpt_DukptKeyVariant"),
        key_serial_number: reader.text("Dukpt_KeySerialNumber"),
        mode: reader.token("Dukpt_Mode"),
        initialization_vector: reader.text("Dukpt_InitializationVector"),
    });
    let encryption_attributes = prune(EncryptionDecryptionAttributes {
        symmetric,
        asymmetric,
        dukpt,
    });
    check_exclusivity(encryption_attributes.as_ref(), conf, &mut reader);
    reader.finish(conf)?;

    debug!(
        "EncryptData request assembled, attribute variants: {:?}",
        encryption_attributes
            .as_ref()
            .map(OneOf::populated_variants)
            .unwrap_or_default()
    );
    Ok(EncryptDataRequest {
        key_identifier: required(key_identifier, "KeyIdentifier")?,
        plain_text: required(plain_text, "PlainText")?,
        encryption_attributes,
    })
}
