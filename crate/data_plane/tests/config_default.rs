#![allow(clippy::unwrap_used)]

// Points HOME at an empty directory, so it runs alone in its binary.

use paycrypto_data_plane::{BuilderConf, PAYCRYPTO_CONF_ENV};

#[test]
fn missing_default_file_yields_defaults() {
    paycrypto_logger::log_init(None);

    let home = tempfile::tempdir().unwrap();
    unsafe {
        std::env::remove_var(PAYCRYPTO_CONF_ENV);
        std::env::set_var("HOME", home.path());
    }

    assert_eq!(
        BuilderConf::location(None).unwrap(),
        Some(home.path().join(".paycrypto/data_plane.json"))
    );
    assert_eq!(BuilderConf::load(None).unwrap(), BuilderConf::default());
}
