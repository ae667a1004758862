//! Sort one array with one algorithm, live.

use crate::commands::common::SettingsArgs;
use crate::controller::Controller;
use crate::terminal::{ToneLogger, TracingRenderer, sparkline};
use clap::Args;
use crossbeam_channel::RecvTimeoutError;
use indicatif::{ProgressBar, ProgressStyle};
use sortviz_config::VALUE_RANGE;
use sortviz_core::{MemoryVisualizer, NullRenderer, SortOutcome, TraceRenderer};
use sortviz_registry::SorterRegistry;
use std::thread;
use std::time::Duration;

/// Interval at which the progress line re-reads the counters.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    settings: SettingsArgs,

    /// Log every traced variable update (at debug level)
    #[arg(long)]
    trace: bool,

    /// Do not draw the live progress line
    #[arg(long)]
    no_progress: bool,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let settings = args.settings.resolve()?;
    let registry = SorterRegistry::new();
    let name = registry
        .get(&settings.sorter)
        .map_or(settings.sorter.as_str(), |d| d.name);

    let mut controller = Controller::new(
        &settings,
        Box::new(MemoryVisualizer::default()),
        Box::new(ToneLogger::default()),
    )?;

    let max = *VALUE_RANGE.end();
    println!("{name} on {} bars, {} ms delay", controller.len(), settings.delay_ms);
    println!("  before: {}", sparkline(controller.source(), max));

    let cancel = controller.cancel_handle();
    ctrlc::set_handler(move || {
        if cancel.cancel() {
            eprintln!("\nCancelling...");
        }
    })?;

    let stats = controller.stats_handle();
    let (done_tx, done_rx) = crossbeam_channel::bounded::<()>(1);
    let trace = args.trace;

    let worker = thread::spawn(move || {
        let mut renderer: Box<dyn TraceRenderer> = if trace {
            Box::new(TracingRenderer)
        } else {
            Box::new(NullRenderer)
        };
        let result = controller.start(renderer.as_mut());
        drop(renderer);
        let _ = done_tx.send(());
        (controller, result)
    });

    let pb = if args.no_progress {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} [{elapsed_precise}] {msg}")?,
    );

    loop {
        match done_rx.recv_timeout(POLL_INTERVAL) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                let snapshot = stats.snapshot();
                pb.set_message(format!("{snapshot} | {}", snapshot.action));
                pb.tick();
            }
        }
    }
    pb.finish_and_clear();

    let (controller, result) = worker
        .join()
        .map_err(|_| anyhow::anyhow!("sort worker panicked"))?;
    let outcome = result?;

    println!("  after:  {}", sparkline(&controller.snapshot()?, max));
    println!();
    let stats = outcome.stats();
    match &outcome {
        SortOutcome::Completed(_) => println!("Completed"),
        SortOutcome::Cancelled(_) => println!("Cancelled"),
    }
    println!("  reads:       {}", stats.reads);
    println!("  writes:      {}", stats.writes);
    println!("  comparisons: {}", stats.comparisons);
    println!("  swaps:       {}", stats.swaps);
    if !stats.action.is_empty() {
        println!("  last action: {}", stats.action);
    }

    Ok(())
}
