use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::domain::{build_index_from_rfc3339, VersionInput};
use crate::error::Result;
use crate::validate::ValidationOptions;
use crate::version::ComputeOptions;

pub const ENV_CI_BUILD_INDEX: &str = "CSEMVER_CI_BUILD_INDEX";
pub const ENV_CI_BUILD_NAME: &str = "CSEMVER_CI_BUILD_NAME";
pub const ENV_BUILD_TIME: &str = "CSEMVER_BUILD_TIME";
pub const ENV_RELEASE_BUILD: &str = "CSEMVER_RELEASE_BUILD";

/// Represents the complete configuration for csemver-build.
///
/// Contains the base version, CI build identity and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub version: VersionConfig,

    #[serde(default)]
    pub ci: CiConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// The base version, typically checked in next to the sources.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct VersionConfig {
    #[serde(default)]
    pub major: i32,

    #[serde(default)]
    pub minor: i32,

    #[serde(default)]
    pub patch: i32,

    #[serde(default)]
    pub pre_release_name: Option<String>,

    #[serde(default)]
    pub pre_release_number: i32,

    #[serde(default)]
    pub pre_release_fix: i32,

    #[serde(default)]
    pub build_meta: Option<String>,
}

/// CI build identity.
///
/// When `build_index` is absent but `build_time` (RFC 3339) is set, the index
/// is derived from the timestamp.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct CiConfig {
    #[serde(default)]
    pub build_index: Option<String>,

    #[serde(default)]
    pub build_name: Option<String>,

    #[serde(default)]
    pub build_time: Option<String>,
}

fn default_include_metadata() -> bool {
    true
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Reject an out-of-range pre-release fix even when the number is 0
    #[serde(default)]
    pub strict_fix_range: bool,

    #[serde(default = "default_include_metadata")]
    pub include_metadata: bool,

    /// Ignore all CI settings and produce a release version
    #[serde(default)]
    pub release_build: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            strict_fix_range: false,
            include_metadata: default_include_metadata(),
            release_build: false,
        }
    }
}

fn env_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Config {
    /// Overlay the `CSEMVER_*` environment variables onto this configuration.
    pub fn apply_env(mut self) -> Self {
        if let Ok(index) = env::var(ENV_CI_BUILD_INDEX) {
            self.ci.build_index = Some(index);
        }
        if let Ok(name) = env::var(ENV_CI_BUILD_NAME) {
            self.ci.build_name = Some(name);
        }
        if let Ok(time) = env::var(ENV_BUILD_TIME) {
            self.ci.build_time = Some(time);
        }
        if let Ok(flag) = env::var(ENV_RELEASE_BUILD) {
            self.behavior.release_build = env_flag(&flag);
        }
        self
    }

    /// The CI build index, derived from `build_time` when not given directly.
    pub fn ci_build_index(&self) -> Result<Option<String>> {
        let explicit = self
            .ci
            .build_index
            .as_ref()
            .filter(|index| !index.trim().is_empty());
        if let Some(index) = explicit {
            return Ok(Some(index.clone()));
        }

        match self.ci.build_time.as_deref().map(str::trim) {
            Some(time) if !time.is_empty() => Ok(Some(build_index_from_rfc3339(time)?)),
            _ => Ok(None),
        }
    }

    /// Build the raw version input described by this configuration.
    pub fn to_input(&self) -> Result<VersionInput> {
        let v = &self.version;
        let mut input = VersionInput {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            pre_release_name: v.pre_release_name.clone(),
            pre_release_number: v.pre_release_number,
            pre_release_fix: v.pre_release_fix,
            build_meta: v.build_meta.clone(),
            ..Default::default()
        };

        if !self.behavior.release_build {
            input.ci_build_index = self.ci_build_index()?;
            input.ci_build_name = self
                .ci
                .build_name
                .clone()
                .filter(|name| !name.trim().is_empty());
        }

        Ok(input)
    }

    pub fn compute_options(&self) -> ComputeOptions {
        ComputeOptions {
            validation: ValidationOptions {
                strict_fix_range: self.behavior.strict_fix_range,
            },
            include_metadata: self.behavior.include_metadata,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `csemver.toml` in current directory
/// 3. `.csemver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./csemver.toml").exists() {
        fs::read_to_string("./csemver.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".csemver.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parse configuration text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}
