#![allow(clippy::unwrap_used, clippy::expect_used)]

// The only test touching the process environment, kept alone in its binary.

use std::io::Write;

use paycrypto_data_plane::{
    BuilderConf, DataPlaneError, FieldIssue, Fields, PAYCRYPTO_CONF_ENV, VariantExclusivity,
    builders::build_mac_request,
};

#[test]
fn configuration_file_from_environment_drives_the_builders() {
    paycrypto_logger::log_init(None);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"variant_exclusivity": "strict"}}"#).unwrap();
    unsafe {
        std::env::set_var(PAYCRYPTO_CONF_ENV, file.path());
    }

    let conf = BuilderConf::load(None).unwrap();
    assert_eq!(conf.variant_exclusivity, VariantExclusivity::Strict);
    assert!(conf.reject_unknown_fields);

    let fields = Fields::new()
        .with("KeyIdentifier", "arn:kek:1")
        .with("MessageData", "0F0F")
        .with("DukptCmac_KeySerialNumber", "FFFF9876543210E00001")
        .with("EmvMac_PrimaryAccountNumber", "171234567890123");
    let err = build_mac_request(&fields, &conf).unwrap_err();
    assert!(matches!(
        err.issues().as_slice(),
        [FieldIssue::ConflictingVariants { variants, .. }] if variants.len() == 2
    ));
    assert!(matches!(err, DataPlaneError::ValidationAggregate(_)));

    unsafe {
        std::env::set_var(PAYCRYPTO_CONF_ENV, "/this/conf/does/not/exist.json");
    }
    assert!(BuilderConf::load(None).is_err());

    unsafe {
        std::env::remove_var(PAYCRYPTO_CONF_ENV);
    }
}
