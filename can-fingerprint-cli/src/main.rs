//! CAN Platform Identification CLI
//!
//! Command-line front end for the can-fingerprint library. It adds what the
//! matching core deliberately leaves to the caller:
//! - candump capture parsing (address + payload length only)
//! - per-capture session state (the running candidate set)
//! - legacy platform-name resolution for user-supplied candidates
//! - text report generation

use anyhow::{bail, Context, Result};
use can_fingerprint::{LegacyResolver, Registry, RegistryBuilder};
use clap::Parser;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

mod capture;
mod config;
mod report;
mod session;

use capture::CaptureReader;
use report::CaptureReport;
use session::IdentificationSession;

/// CAN Platform Identifier - match bus captures against signature catalogs
#[derive(Parser, Debug)]
#[command(name = "can-fingerprint-cli")]
#[command(about = "Identify vehicle platforms from candump captures", long_about = None)]
#[command(version)]
struct Args {
    /// Path to capture file(s) to identify (can be repeated)
    #[arg(short, long, value_name = "FILE")]
    log: Vec<PathBuf>,

    /// Path to brand catalog JSON file(s) (can be repeated)
    #[arg(long, value_name = "FILE")]
    catalog: Vec<PathBuf>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Starting candidate platform(s); legacy spellings accepted
    #[arg(long, value_name = "NAME")]
    candidate: Vec<String>,

    /// Maximum number of frames to feed per capture (0 = no limit)
    #[arg(long, value_name = "COUNT", default_value_t = 0)]
    max_frames: usize,

    /// Abort a capture on the first malformed line instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Output file for the report (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

/// Everything needed to identify one capture
struct RunPlan {
    logs: Vec<PathBuf>,
    catalogs: Vec<PathBuf>,
    candidates: Option<Vec<String>>,
    max_frames: usize,
    skip_bad_lines: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    log::info!("CAN Platform Identifier v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using matching library v{}", can_fingerprint::VERSION);

    let plan = if let Some(config_path) = &args.config {
        let config = config::load_config(config_path)?;
        log::debug!("Configuration loaded from {:?}", config_path);
        RunPlan {
            logs: config.input.logs,
            catalogs: config.input.catalogs,
            candidates: config.identification.candidates,
            max_frames: config.identification.max_frames,
            skip_bad_lines: config.identification.skip_bad_lines,
        }
    } else {
        RunPlan {
            logs: args.log.clone(),
            catalogs: args.catalog.clone(),
            candidates: (!args.candidate.is_empty()).then(|| args.candidate.clone()),
            max_frames: args.max_frames,
            skip_bad_lines: !args.strict,
        }
    };

    if plan.catalogs.is_empty() || plan.logs.is_empty() {
        println!("CAN Platform Identifier - no input specified");
        println!("\nQuick start:");
        println!("  can-fingerprint-cli --catalog honda.json --log drive.log");
        println!("  can-fingerprint-cli --config config.toml");
        println!("\nUse --help for more options");
        return Ok(());
    }

    let registry = build_registry(&plan.catalogs)?;
    let candidates = starting_candidates(&registry, plan.candidates.as_deref())?;

    // Sessions are independent: one candidate set per capture, no shared
    // mutable state, so captures identify in parallel.
    let mut reports: Vec<(usize, CaptureReport)> = plan
        .logs
        .par_iter()
        .enumerate()
        .map(|(idx, path)| {
            identify_capture(&registry, candidates.clone(), path, &plan).map(|r| (idx, r))
        })
        .collect::<Result<_>>()?;
    reports.sort_by_key(|(idx, _)| *idx);
    let reports: Vec<CaptureReport> = reports.into_iter().map(|(_, r)| r).collect();

    let text = report::render(&reports);
    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Failed to write report to {:?}", path))?;
            log::info!("Report written to {:?}", path);
        }
        None => print!("{}", text),
    }

    Ok(())
}

/// Build the registry once from all catalog files
fn build_registry(catalogs: &[PathBuf]) -> Result<Registry> {
    let mut builder = RegistryBuilder::new();
    for path in catalogs {
        builder
            .add_catalog_file(path)
            .with_context(|| format!("Failed to load catalog {:?}", path))?;
    }
    let registry = builder.build();

    let stats = registry.stats();
    log::info!(
        "Loaded {} platform(s), {} signature(s), {} distinct address(es)",
        stats.num_platforms,
        stats.num_signatures,
        stats.num_addresses
    );
    Ok(registry)
}

/// Resolve the starting candidate set, applying legacy-name resolution to
/// user-supplied names
fn starting_candidates(
    registry: &Registry,
    requested: Option<&[String]>,
) -> Result<HashSet<String>> {
    let Some(requested) = requested else {
        return Ok(registry
            .fingerprinted_names()
            .iter()
            .map(|s| s.to_string())
            .collect());
    };

    let resolver = LegacyResolver::new();
    let mut candidates = HashSet::new();
    for name in requested {
        let canonical = resolver.resolve(name);
        if canonical != name {
            log::info!("Resolved legacy name {:?} -> {:?}", name, canonical);
        }
        if !registry.contains(canonical) {
            bail!("Candidate platform {:?} is not in any loaded catalog", canonical);
        }
        if registry.signatures_for(canonical)?.is_empty() {
            log::warn!(
                "Candidate {:?} has no bus signatures and can never match",
                canonical
            );
            continue;
        }
        candidates.insert(canonical.to_string());
    }

    if candidates.is_empty() {
        bail!("No usable starting candidates");
    }
    Ok(candidates)
}

/// Run one identification session over one capture file
fn identify_capture(
    registry: &Registry,
    candidates: HashSet<String>,
    path: &Path,
    plan: &RunPlan,
) -> Result<CaptureReport> {
    let mut session = IdentificationSession::with_candidates(registry, candidates);
    let mut skipped_lines = 0usize;

    for item in CaptureReader::open(path)? {
        if plan.max_frames > 0 && session.frames_seen() >= plan.max_frames {
            log::debug!("Frame cap of {} reached for {:?}", plan.max_frames, path);
            break;
        }

        let frame = match item {
            Ok(frame) => frame,
            Err(e) if plan.skip_bad_lines => {
                log::warn!("{:?}: {:#}", path, e);
                skipped_lines += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        session.observe(&frame.observation)?;
    }

    let status = session.status();
    log::info!(
        "{:?}: {} after {} frame(s)",
        path,
        status,
        session.frames_seen()
    );

    let mut remaining: Vec<String> = session.candidates().iter().cloned().collect();
    remaining.sort_unstable();

    Ok(CaptureReport {
        path: path.to_path_buf(),
        frames: session.frames_seen(),
        skipped_lines,
        settled_after: session.settled_after(),
        status,
        remaining,
    })
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
