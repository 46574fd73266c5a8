use tracing::debug;

use crate::{
    config::BuilderConf,
    error::result::DataPlaneResult,
    fields::{FieldReader, Fields},
    models::{
        DiffieHellmanDerivationData, IncomingDiffieHellmanTr31KeyBlock, IncomingKeyMaterial,
        OutgoingKeyMaterial, OutgoingTr31KeyBlock, TranslateKeyMaterialRequest,
    },
    presence::prune,
};

/// Build a `TranslateKeyMaterial` request.
///
/// Nothing is required locally: the incoming ECDH key block and the outgoing
/// TR-31 wrapping key are each sent only if one of their fields is given.
pub fn build_key_translation_request(
    fields: &Fields,
    conf: &BuilderConf,
) -> DataPlaneResult<TranslateKeyMaterialRequest> {
    let mut reader = FieldReader::new(fields);

    let derivation_data = prune(DiffieHellmanDerivationData {
        shared_information: reader.text("DerivationData_SharedInformation"),
    });
    let diffie_hellman_tr31_key_block = prune(IncomingDiffieHellmanTr31KeyBlock {
        certificate_authority_public_key_identifier: reader
            .text("DiffieHellmanTr31KeyBlock_CertificateAuthorityPublicKeyIdentifier"),
        derivation_data,
        derive_key_algorithm: reader.token("DiffieHellmanTr31KeyBlock_DeriveKeyAlgorithm"),
        key_derivation_function: reader.token("DiffieHellmanTr31KeyBlock_KeyDerivationFunction"),
        key_derivation_hash_algorithm: reader
            .token("DiffieHellmanTr31KeyBlock_KeyDerivationHashAlgorithm"),
        private_key_identifier: reader.text("DiffieHellmanTr31KeyBlock_PrivateKeyIdentifier"),
        public_key_certificate: reader.text("DiffieHellmanTr31KeyBlock_PublicKeyCertificate"),
        wrapped_key_block: reader.text("DiffieHellmanTr31KeyBlock_WrappedKeyBlock"),
    });
    let incoming_key_material = prune(IncomingKeyMaterial {
        diffie_hellman_tr31_key_block,
    });

    let outgoing_key_material = prune(OutgoingKeyMaterial {
        tr31_key_block: prune(OutgoingTr31KeyBlock {
            wrapping_key_identifier: reader.text("Tr31KeyBlock_WrappingKeyIdentifier"),
        }),
    });
    let key_check_value_algorithm = reader.token("KeyCheckValueAlgorithm");
    reader.finish(conf)?;

    debug!(
        "TranslateKeyMaterial request assembled, incoming: {}, outgoing: {}",
        incoming_key_material.is_some(),
        outgoing_key_material.is_some()
    );
    Ok(TranslateKeyMaterialRequest {
        incoming_key_material,
        outgoing_key_material,
        key_check_value_algorithm,
    })
}
