//! report-runner: headless runner for the sorting-efficiency analysis engine.
//!
//! Usage:
//!   report-runner --scans scans.json --routes routes.json
//!   report-runner --scans scans.json --routes routes.json --out report.json --pretty
//!
//! Reads two JSON arrays (scan events and route assignments), runs the
//! analysis once, and writes the report as JSON — to stdout by default, or
//! to `--out <file>` with a human summary printed alongside.

use anyhow::{Context, Result};
use sortline_core::{analyze, AnalysisReport, RouteRecord, ScanRecord};
use std::env;
use std::fs;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let scans_path = required_arg(&args, "--scans")?;
    let routes_path = required_arg(&args, "--routes")?;
    let out = optional_arg(&args, "--out");
    let pretty = args.iter().any(|a| a == "--pretty");

    let scans: Vec<ScanRecord> = read_json(&scans_path)?;
    let routes: Vec<RouteRecord> = read_json(&routes_path)?;
    log::info!(
        "loaded {} scan records, {} route records",
        scans.len(),
        routes.len()
    );

    let report = analyze(&scans, &routes).context("analysis failed")?;

    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match out {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("writing {path}"))?;
            print_summary(&report);
            println!("report written to {path}");
        }
        // Stdout mode stays machine-readable: JSON only, no summary.
        None => println!("{json}"),
    }

    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    println!("=== ANALYSIS SUMMARY ===");
    println!("  operators:      {}", report.operators.len());
    println!("  total scans:    {}", report.total_scans);
    println!(
        "  avg efficiency: {:.2} scans/hour",
        report.average_total_efficiency
    );
    println!();

    println!("=== TOP OPERATORS ===");
    for op in report.operators.iter().take(5) {
        println!(
            "  {} | {} scans | {:.1}h | {:.2} scans/hour",
            op.name, op.scan_count, op.working_hours, op.total_efficiency
        );
    }
    println!();

    println!("=== REGION SUMMARY ===");
    for region in &report.region_summary {
        println!(
            "  {} | {} scans | {} operators | {:.2} scans/hour | {:.1} avg/operator",
            region.region_key,
            region.total_scans,
            region.operator_count,
            region.efficiency,
            region.average_per_operator
        );
    }
    println!();
}

fn required_arg(args: &[String], flag: &str) -> Result<String> {
    optional_arg(args, flag).with_context(|| format!("missing required {flag} <file> argument"))
}

fn optional_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))
}
