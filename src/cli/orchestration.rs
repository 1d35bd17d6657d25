//! Main workflow orchestration logic
//!
//! Merges configuration and command-line overrides into a [`VersionInput`]
//! and runs the computation. Kept free of clap so the workflow can be driven
//! programmatically.

use crate::config::Config;
use crate::domain::{build_index_from_rfc3339, VersionInput};
use crate::error::Result;
use crate::version::{compute_with, VersionInfo};

/// Explicit overrides for the version computation.
///
/// Every `Some` replaces the corresponding configuration value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputeWorkflowArgs {
    pub major: Option<i32>,
    pub minor: Option<i32>,
    pub patch: Option<i32>,
    pub pre_release_name: Option<String>,
    pub pre_release_number: Option<i32>,
    pub pre_release_fix: Option<i32>,
    pub ci_build_index: Option<String>,
    pub ci_build_name: Option<String>,
    /// RFC 3339 timestamp the CI build index is derived from
    pub build_time: Option<String>,
    pub build_meta: Option<String>,
    /// Produce a release version even if CI settings are present
    pub release: bool,
    pub strict: bool,
    pub no_metadata: bool,
}

/// Apply the overrides on top of `config`.
pub fn merge_config(args: &ComputeWorkflowArgs, mut config: Config) -> Result<Config> {
    let version = &mut config.version;
    if let Some(major) = args.major {
        version.major = major;
    }
    if let Some(minor) = args.minor {
        version.minor = minor;
    }
    if let Some(patch) = args.patch {
        version.patch = patch;
    }
    if let Some(name) = &args.pre_release_name {
        version.pre_release_name = Some(name.clone());
    }
    if let Some(number) = args.pre_release_number {
        version.pre_release_number = number;
    }
    if let Some(fix) = args.pre_release_fix {
        version.pre_release_fix = fix;
    }
    if let Some(meta) = &args.build_meta {
        version.build_meta = Some(meta.clone());
    }

    if let Some(time) = &args.build_time {
        // an explicit time beats an index coming from config or environment
        config.ci.build_index = Some(build_index_from_rfc3339(time)?);
        config.ci.build_time = Some(time.clone());
    }
    if let Some(index) = &args.ci_build_index {
        config.ci.build_index = Some(index.clone());
    }
    if let Some(name) = &args.ci_build_name {
        config.ci.build_name = Some(name.clone());
    }

    if args.release {
        config.behavior.release_build = true;
    }
    if args.strict {
        config.behavior.strict_fix_range = true;
    }
    if args.no_metadata {
        config.behavior.include_metadata = false;
    }

    Ok(config)
}

/// Resolve the final input for `args` and `config`.
pub fn resolve_input(args: &ComputeWorkflowArgs, config: Config) -> Result<VersionInput> {
    merge_config(args, config)?.to_input()
}

/// Main compute workflow
///
/// 1. Merge overrides into the configuration
/// 2. Build the version input
/// 3. Validate and compute both version forms
pub fn run_compute_workflow(args: &ComputeWorkflowArgs, config: Config) -> Result<VersionInfo> {
    let config = merge_config(args, config)?;
    let input = config.to_input()?;
    compute_with(&input, &config.compute_options())
}
