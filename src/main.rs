use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;

use csemver_build::cli::orchestration::{run_compute_workflow, ComputeWorkflowArgs};
use csemver_build::config;
use csemver_build::ui::{self, OutputFormat};
use csemver_build::CsemverError;

#[derive(clap::Parser)]
#[command(
    name = "csemver-build",
    version,
    about = "Compute CSemVer version strings and file versions for a build"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, allow_hyphen_values = true, help = "Major version [0-99999]")]
    major: Option<i32>,

    #[arg(long, allow_hyphen_values = true, help = "Minor version [0-49999]")]
    minor: Option<i32>,

    #[arg(long, allow_hyphen_values = true, help = "Patch version [0-9999]")]
    patch: Option<i32>,

    #[arg(long = "pre-release", help = "Pre-release name (alpha, beta, delta, epsilon, gamma, kappa, pre, rc)")]
    pre_release_name: Option<String>,

    #[arg(long, allow_hyphen_values = true, help = "Pre-release number [0-99]")]
    pre_release_number: Option<i32>,

    #[arg(long, allow_hyphen_values = true, help = "Pre-release fix [0-99]")]
    pre_release_fix: Option<i32>,

    #[arg(long, help = "CI build index")]
    ci_build_index: Option<String>,

    #[arg(long, help = "CI build name")]
    ci_build_name: Option<String>,

    #[arg(long, help = "Build timestamp (RFC 3339) to derive the CI build index from")]
    build_time: Option<String>,

    #[arg(long, help = "Build metadata appended as +META")]
    build_meta: Option<String>,

    #[arg(long, help = "Produce a release version, ignoring CI settings")]
    release: bool,

    #[arg(long, help = "Range-check the pre-release fix even when the number is 0")]
    strict: bool,

    #[arg(long, help = "Leave build metadata out of the version string")]
    no_metadata: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Version, help = "Output format")]
    format: OutputFormat,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

impl Args {
    fn workflow_args(&self) -> ComputeWorkflowArgs {
        ComputeWorkflowArgs {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            pre_release_name: self.pre_release_name.clone(),
            pre_release_number: self.pre_release_number,
            pre_release_fix: self.pre_release_fix,
            ci_build_index: self.ci_build_index.clone(),
            ci_build_name: self.ci_build_name.clone(),
            build_time: self.build_time.clone(),
            build_meta: self.build_meta.clone(),
            release: self.release,
            strict: self.strict,
            no_metadata: self.no_metadata,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg.apply_env(),
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let info = match run_compute_workflow(&args.workflow_args(), config) {
        Ok(info) => info,
        Err(e) if e.is_coded() => {
            ui::display_diagnostics(e.diagnostics());
            std::process::exit(1);
        }
        Err(CsemverError::Internal(msg)) => {
            // a defect, not bad input
            ui::display_error(&format!("internal failure: {}", msg));
            std::process::exit(70);
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    tracing::info!(version = %info.version, file_version = %info.file_version, "computed version");
    println!("{}", ui::render_output(&info, args.format)?);

    Ok(())
}
