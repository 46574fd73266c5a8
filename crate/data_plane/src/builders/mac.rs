use tracing::debug;

use super::check_exclusivity;
use crate::{
    config::BuilderConf,
    error::result::DataPlaneResult,
    fields::{FieldReader, Fields, required},
    models::{
        GenerateMacRequest, MacAlgorithm, MacAlgorithmDukpt, MacAlgorithmEmv, MacAttributes,
        SessionKeyDerivationValue, VerifyMacRequest,
    },
    presence::{OneOf, prune},
};

/// Read one of the three DUKPT MAC variants, whose flat names share a prefix.
macro_rules! dukpt_variant {
    ($reader:expr, $prefix:literal) => {
        prune(MacAlgorithmDukpt {
            dukpt_derivation_type: $reader.token(concat!($prefix, "_DukptDerivationType")),
            dukpt_key_variant: $reader.token(concat!($prefix, "_DukptKeyVariant")),
            key_serial_number: $reader.text(concat!($prefix, "_KeySerialNumber")),
        })
    };
}

fn read_emv_mac(reader: &mut FieldReader<'_>) -> Option<MacAlgorithmEmv> {
    let session_key_derivation_value = prune(SessionKeyDerivationValue {
        application_cryptogram: reader.text("SessionKeyDerivationValue_ApplicationCryptogram"),
        application_transaction_counter: reader
            .text("SessionKeyDerivationValue_ApplicationTransactionCounter"),
    });
    prune(MacAlgorithmEmv {
        major_key_derivation_mode: reader.token("EmvMac_MajorKeyDerivationMode"),
        pan_sequence_number: reader.text("EmvMac_PanSequenceNumber"),
        primary_account_number: reader.text("EmvMac_PrimaryAccountNumber"),
        session_key_derivation_mode: reader.token("EmvMac_SessionKeyDerivationMode"),
        session_key_derivation_value,
    })
}

fn read_mac_attributes(
    reader: &mut FieldReader<'_>,
    algorithm_field: &'static str,
) -> Option<MacAttributes> {
    let algorithm = reader.token::<MacAlgorithm>(algorithm_field);
    let dukpt_cmac = dukpt_variant!(reader, "DukptCmac");
    let dukpt_iso9797_algorithm1 = dukpt_variant!(reader, "DukptIso9797Algorithm1");
    let dukpt_iso9797_algorithm3 = dukpt_variant!(reader, "DukptIso9797Algorithm3");
    let emv_mac = read_emv_mac(reader);
    prune(MacAttributes {
        algorithm,
        dukpt_cmac,
        dukpt_iso9797_algorithm1,
        dukpt_iso9797_algorithm3,
        emv_mac,
    })
}

/// Build a `GenerateMac` request.
///
/// `KeyIdentifier` and `MessageData` are required. The generation attributes
/// are `GenerationAttributes_Algorithm` plus the `DukptCmac_*`,
/// `DukptIso9797Algorithm1_*`, `DukptIso9797Algorithm3_*`, `EmvMac_*` and
/// `SessionKeyDerivationValue_*` groups.
pub fn build_mac_request(
    fields: &Fields,
    conf: &BuilderConf,
) -> DataPlaneResult<GenerateMacRequest> {
    let mut reader = FieldReader::new(fields);
    let key_identifier = reader.required_text("KeyIdentifier");
    let message_data = reader.required_text("MessageData");
    let generation_attributes = read_mac_attributes(&mut reader, "GenerationAttributes_Algorithm");
    let mac_length = reader.integer_i32("MacLength");
    check_exclusivity(generation_attributes.as_ref(), conf, &mut reader);
    reader.finish(conf)?;

    debug!(
        "GenerateMac request assembled, MAC variants: {:?}",
        generation_attributes
            .as_ref()
            .map(OneOf::populated_variants)
            .unwrap_or_default()
    );
    Ok(GenerateMacRequest {
        key_identifier: required(key_identifier, "KeyIdentifier")?,
        message_data: required(message_data, "MessageData")?,
        generation_attributes,
        mac_length,
    })
}

/// Build a `VerifyMac` request.
///
/// Same surface as [`build_mac_request`] with `VerificationAttributes_Algorithm`
/// in place of the generation algorithm, plus the required `Mac`.
pub fn build_verify_mac_request(
    fields: &Fields,
    conf: &BuilderConf,
) -> DataPlaneResult<VerifyMacRequest> {
    let mut reader = FieldReader::new(fields);
    let key_identifier = reader.required_text("KeyIdentifier");
    let message_data = reader.required_text("MessageData");
    let mac = reader.required_text("Mac");
    let verification_attributes =
        read_mac_attributes(&mut reader, "VerificationAttributes_Algorithm");
    let mac_length = reader.integer_i32("MacLength");
    check_exclusivity(verification_attributes.as_ref(), conf, &mut reader);
    reader.finish(conf)?;

    debug!(
        "VerifyMac request assembled, MAC variants: {:?}",
        verification_attributes
            .as_ref()
            .map(OneOf::populated_variants)
            .unwrap_or_default()
    );
    Ok(VerifyMacRequest {
        key_identifier: required(key_identifier, "KeyIdentifier")?,
        message_data: required(message_data, "MessageData")?,
        mac: required(mac, "Mac")?,
        verification_attributes,
        mac_length,
    })
}
