#![doc = include_str!("../README.md")]

mod config;
mod telemetry;

use clap::Parser;
use config::{CliArgs, ProbeConfig};
use fanprobe::{DispatchReport, Dispatcher, FileSource, LogProber, run};
use std::process::ExitCode;
use telemetry::init_tracing;
use tokio::signal;
use tokio_util::sync::CancellationToken;

// Using mimalloc for better performance under contention, especially in musl
// environments.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Conventional exit status for a run stopped by SIGINT.
const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main]
async fn main() -> ExitCode {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();

    match probe(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fanprobe: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn probe(args: CliArgs) -> anyhow::Result<ExitCode> {
    let config = ProbeConfig::try_from(args)?;
    init_tracing(config.log_format)?;
    log_startup_info(&config);

    let cancel = CancellationToken::new();
    let signals = tokio::spawn(shutdown_signal(cancel.clone()));

    let source = FileSource::new(&config.file);
    let dispatcher = Dispatcher::with_cancellation(LogProber, cancel);
    let result = run(&source, &dispatcher, config.num_workers).await;
    signals.abort();

    Ok(exit_code(&result?))
}

fn log_startup_info(config: &ProbeConfig) {
    if cfg!(debug_assertions) {
        tracing::debug!("Starting probe run with full config: {:#?}", config);
    } else {
        tracing::debug!(
            "Probing endpoints from {} with up to {} workers",
            config.file.display(),
            config.num_workers
        );
    }
}

fn exit_code(report: &DispatchReport) -> ExitCode {
    for failure in report.failures() {
        tracing::error!(
            "Probe of {:?} (line {}) failed: {}",
            failure.endpoint.as_str(),
            failure.index + 1,
            failure.error
        );
    }
    for worker in report.panicked_workers() {
        tracing::error!(
            "Worker {} panicked after {} of {} endpoints",
            worker.worker_id,
            worker.probed,
            worker.assigned
        );
    }

    if !report.is_success() {
        tracing::error!(
            "{} probes failed and {} workers panicked",
            report.failure_count(),
            report.panicked_workers().count()
        );
        return ExitCode::FAILURE;
    }

    if report.skipped() > 0 {
        tracing::warn!("Run interrupted, {} endpoints were not probed", report.skipped());
        return ExitCode::from(EXIT_INTERRUPTED);
    }

    tracing::debug!(
        "Probed {} endpoints with {} workers",
        report.probed(),
        report.workers_launched()
    );
    ExitCode::SUCCESS
}

/// Cancels the run on Ctrl+C or SIGTERM. Workers finish their current probe
/// and skip the rest of their partition.
async fn shutdown_signal(cancel: CancellationToken) {
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C signal"),
        () = terminate => tracing::info!("Received SIGTERM signal"),
    }

    tracing::info!("Cancelling remaining probes...");
    cancel.cancel();
}
