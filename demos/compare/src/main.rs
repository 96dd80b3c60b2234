//! compare: Standard vs AI-Enabled clinic, side by side.
//!
//! Runs one batch simulation and a Monte-Carlo replication for the
//! aggregate comparison, then drives the live engine to completion with a
//! fixed frame, streaming its history to CSV.
//!
//! ```text
//! compare [--config clinic.json] [--seed N] [--runs N] [--frame MIN] [--out DIR]
//! ```
//!
//! Without `--seed` every run draws from OS entropy.  Set `RUST_LOG=debug`
//! for engine progress.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use pf_batch::{BatchEngine, BatchReport, replicate};
use pf_core::{ClinicConfig, ClinicKind, SimRng};
use pf_flow::PatientClass;
use pf_live::LiveEngineBuilder;
use pf_output::{CsvWriter, HistoryObserver, OutputWriter, patient_rows, summary_rows};

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "compare", about = "Standard vs AI-Enabled clinic, side by side")]
struct Args {
    /// JSON clinic config; defaults are used when omitted
    #[arg(long, env = "PF_CONFIG")]
    config: Option<PathBuf>,
    /// Master seed; OS entropy when omitted
    #[arg(long, env = "PF_SEED")]
    seed: Option<u64>,
    /// Monte-Carlo replications
    #[arg(long, default_value_t = 50)]
    runs: usize,
    /// Simulated minutes per rendered frame
    #[arg(long, default_value_t = 0.25)]
    frame: f64,
    /// Output directory
    #[arg(long, default_value = "output/compare")]
    out: PathBuf,
}

fn load_config(path: Option<&PathBuf>) -> Result<ClinicConfig> {
    let Some(path) = path else {
        return Ok(ClinicConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: ClinicConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

fn rng(seed: Option<u64>, stream: u64) -> SimRng {
    match seed {
        Some(s) => SimRng::new(s).child(stream),
        None    => SimRng::from_entropy(),
    }
}

// ── Report table ──────────────────────────────────────────────────────────────

fn print_report(report: &BatchReport) {
    println!("{:<28} {:>12} {:>12}", "", "Standard", "AI-Enabled");
    println!("{}", "-".repeat(54));
    let row = |label: &str, f: &dyn Fn(ClinicKind) -> String| {
        println!("{:<28} {:>12} {:>12}", label, f(ClinicKind::Standard), f(ClinicKind::AiEnabled));
    };
    row("Arrivals", &|c| report.clinic(c).arrivals.to_string());
    row("Throughput", &|c| report.clinic(c).throughput.to_string());
    row("Avg length of stay (min)", &|c| format!("{:.2}", report.clinic(c).avg_length_of_stay));
    row("Avg wait (min)", &|c| format!("{:.2}", report.clinic(c).avg_wait_time));
    row("Avg service (min)", &|c| format!("{:.2}", report.clinic(c).avg_service_time));
    row("Doctor utilisation (%)", &|c| format!("{:.1}", report.clinic(c).doctor_utilization_percent));
    println!(
        "Digital check-ins: {} of {} AI patients",
        report.ai.class_count(PatientClass::AiDigital),
        report.ai.arrivals,
    );
    for clinic in ClinicKind::ALL {
        for s in &report.clinic(clinic).station_utilization {
            println!(
                "  {:<16} x{}  {:>5} served  {:>5.1}%",
                s.station.as_str(),
                s.capacity,
                s.completed,
                s.utilization_percent,
            );
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;
    config.validate()?;

    println!("=== compare: Standard vs AI-Enabled clinic ===");
    println!(
        "Horizon: {} min  |  Mean arrival gap: {} min  |  Digital adoption: {:.0}%",
        config.duration_minutes,
        config.avg_arrival_interval,
        config.digital_adoption_rate * 100.0,
    );
    println!();

    // 1. One batch run.
    let t0 = Instant::now();
    let mut batch = BatchEngine::new(config.clone(), rng(args.seed, 0))?;
    let report = batch.run()?;
    info!("batch run took {:.3} s", t0.elapsed().as_secs_f64());
    print_report(&report);
    println!();

    // 2. Monte-Carlo replication.
    let t0 = Instant::now();
    let seed = args.seed.unwrap_or_else(|| SimRng::from_entropy().next_seed());
    let summary = replicate(&config, args.runs, seed)?;
    println!(
        "Mean over {} runs ({:.3} s): throughput {:.1} vs {:.1}, wait {:.2} vs {:.2} min",
        summary.runs,
        t0.elapsed().as_secs_f64(),
        summary.standard.throughput,
        summary.ai.throughput,
        summary.standard.avg_wait_time,
        summary.ai.avg_wait_time,
    );
    println!();

    // 3. Live engine, driven to completion.
    let mut live = LiveEngineBuilder::new(config.clone()).rng(rng(args.seed, 1)).build()?;
    let mut obs = HistoryObserver::new(CsvWriter::new(&args.out)?);
    let t0 = Instant::now();
    let end = live.drive(args.frame, &mut obs)?;
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    let stats = live.stats();
    println!(
        "Live run drained at t={end:.1} in {:.3} s: {} standard / {} AI patients finished, {} history rows",
        t0.elapsed().as_secs_f64(),
        stats.tally(ClinicKind::Standard).completed,
        stats.tally(ClinicKind::AiEnabled).completed,
        obs.rows_written(),
    );

    // 4. Batch results next to the live history.
    let mut writer = obs.into_writer();
    writer.write_report(&summary_rows(&report))?;
    writer.write_records(&patient_rows(batch.records()))?;
    writer.finish()?;

    let snapshot = serde_json::to_string_pretty(&live.snapshot())?;
    std::fs::write(args.out.join("final_snapshot.json"), snapshot)?;
    println!("Output written to {}", args.out.display());

    Ok(())
}
