use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};
use tracing::{debug, info};

use crate::{data_plane_bail, error::result::DataPlaneResult};

/// Environment variable holding the path of the builder configuration file
pub const PAYCRYPTO_CONF_ENV: &str = "PAYCRYPTO_CONF";

/// Returns the path to the current user's home folder.
///
/// `HOME` on Linux and macOS, `USERPROFILE` or `HOMEDRIVE` + `HOMEPATH` on
/// Windows. Returns `None` if none of them is set.
fn get_home_folder() -> Option<PathBuf> {
    if let Some(home) = env::var_os("HOME") {
        return Some(PathBuf::from(home))
    } else if let Some(profile) = env::var_os("USERPROFILE") {
        return Some(PathBuf::from(profile))
    } else if let (Some(hdrive), Some(hpath)) = (env::var_os("HOMEDRIVE"), env::var_os("HOMEPATH"))
    {
        return Some(PathBuf::from(hdrive).join(hpath))
    }
    None
}

fn get_default_conf_path() -> Option<PathBuf> {
    get_home_folder().map(|home| home.join(".paycrypto/data_plane.json"))
}

/// How the builders treat several populated variants of the same oneof group
/// (e.g. both `DukptCmac` and `EmvMac` in the MAC attributes).
#[derive(
    Serialize, Deserialize, Debug, Display, EnumString, VariantNames, Clone, Copy, Default, PartialEq, Eq,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VariantExclusivity {
    /// Send the request as assembled and let the service reject it
    #[default]
    Deferred,
    /// Reject the request locally before any transport call
    Strict,
}

const fn default_true() -> bool {
    true
}

/// Builder settings.
///
/// ```json
/// {
///     "variant_exclusivity": "strict",
///     "reject_unknown_fields": true
/// }
/// ```
#[derive(Serialize, Deserialize, Eq, PartialEq, Debug, Clone, Copy)]
pub struct BuilderConf {
    #[serde(default)]
    pub variant_exclusivity: VariantExclusivity,
    /// Report fields that are not part of the operation's parameter surface
    #[serde(default = "default_true")]
    pub reject_unknown_fields: bool,
}

impl Default for BuilderConf {
    fn default() -> Self {
        Self {
            variant_exclusivity: VariantExclusivity::Deferred,
            reject_unknown_fields: true,
        }
    }
}

impl BuilderConf {
    /// Resolve the configuration file path from, in order:
    /// - the explicit `conf` argument, which must exist
    /// - the `PAYCRYPTO_CONF` environment variable, which must point to an existing file
    /// - `~/.paycrypto/data_plane.json`
    ///
    /// Returns `None` when no explicit path is given and the default one
    /// cannot be determined.
    pub fn location(conf: Option<&Path>) -> DataPlaneResult<Option<PathBuf>> {
        if let Some(conf_path) = conf {
            if !conf_path.exists() {
                data_plane_bail!("Configuration file {} does not exist", conf_path.display());
            }
            return Ok(Some(conf_path.to_path_buf()))
        } else if let Some(conf_path) = env::var_os(PAYCRYPTO_CONF_ENV).map(PathBuf::from) {
            if !conf_path.exists() {
                data_plane_bail!(
                    "Configuration file {} specified in {PAYCRYPTO_CONF_ENV} environment \
                     variable does not exist",
                    conf_path.display()
                );
            }
            return Ok(Some(conf_path))
        }
        Ok(get_default_conf_path())
    }

    /// Load the configuration, falling back to defaults when the default
    /// location holds no file.
    pub fn load(conf: Option<&Path>) -> DataPlaneResult<Self> {
        match Self::location(conf)? {
            Some(path) if path.exists() => {
                debug!("loading builder configuration from {}", path.display());
                Self::from_json_path(&path)
            }
            _ => {
                info!("no builder configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_json_path(path: &Path) -> DataPlaneResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn from_json_str(json: &str) -> DataPlaneResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            crate::DataPlaneError::Configuration(format!("invalid builder configuration: {e}"))
        })
    }
}
