//! gworld-scan binary: the four-gate pipeline.
//!
//! Gates (each fatal on failure): provider session, process discovery,
//! module resolution, then the scan itself, which runs to completion and
//! treats individual read failures as missing signal.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gworld_scan::config::{load_config, validate_config};
use gworld_scan::process::{find_target, resolve_module, TargetProcess};
use gworld_scan::provider::VmmProvider;
use gworld_scan::report::{rank, render_report};
use gworld_scan::scanner::{RegionScanner, ScanOptions, ScanWindow, WorldOffsets};

fn main() -> Result<()> {
    let config = load_config();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .with_target(false)
        .init();

    info!("gworld-scan v{}", env!("CARGO_PKG_VERSION"));

    validate_config(&config).context("invalid configuration")?;

    // Gate 1: provider session
    let provider = VmmProvider::connect(
        &config.provider.library_path,
        &config.provider.device,
        &config.provider.extra_args,
    )
    .context(
        "failed to establish the DMA session; check that the vmm library and its \
         dependencies are present, the device is connected, and the target machine is on",
    )?;

    // Gate 2: process discovery
    let (pid, name) = find_target(&provider, &config.target)
        .context("target process not found; make sure the game is running")?;

    // Gate 3: module resolution
    let module_base = resolve_module(&provider, pid, &config.target.module_name)?;

    let target = TargetProcess::new(&provider, pid, name, module_base);

    // Window around the known-good anchor
    let anchor = module_base + config.scan.anchor_offset;
    let radius = config.scan.radius_mb * 1024 * 1024;
    let window = ScanWindow::around(anchor, radius);
    info!(
        "Scanning {:X}..{:X} (±{} MiB around anchor {:X})",
        window.start, window.end, config.scan.radius_mb, anchor
    );

    let options = ScanOptions {
        chunk_size: config.scan.chunk_size,
        min_confidence: config.scan.min_confidence,
    };
    let mut scanner = RegionScanner::new(&target, WorldOffsets::from(&config.offsets), options);
    let candidates = scanner.scan(&window);

    let ranked = rank(candidates);
    print!("{}", render_report(&ranked));

    Ok(())
}
