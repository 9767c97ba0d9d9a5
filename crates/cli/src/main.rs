use anyhow::Result;
use clap::{Parser, Subcommand};
use planimetry::GeomCfg;
use serde_json::json;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod contacts;
mod demo;
mod measure;
mod provenance;
mod report;

use measure::FigureArgs;
use report::FigureReport;

#[derive(Parser)]
#[command(name = "planimetry")]
#[command(about = "Planar figure demonstrations and measurements")]
struct Cmd {
    /// Tolerance for parallel, right-angle and midpoint checks (default: built-in per check)
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the reference figure list and print type, perimeter, area, description
    Demo {
        /// Print a JSON array instead of text
        #[arg(long)]
        json: bool,
        /// Also write the JSON report here, with a provenance sidecar
        #[arg(long)]
        out: Option<PathBuf>,
        /// Append this many sampled figures
        #[arg(long, default_value_t = 0)]
        random: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Build one figure and print its report as JSON
    Measure {
        #[command(subcommand)]
        figure: FigureArgs,
    },
    /// Run the contact book walkthrough
    Contacts,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = cmd.tolerance.map_or_else(GeomCfg::default, GeomCfg::uniform);
    match cmd.action {
        Action::Demo {
            json,
            out,
            random,
            seed,
        } => run_demo(io::stdout().lock(), cfg, json, out, random, seed),
        Action::Measure { figure } => measure(cfg, figure),
        Action::Contacts => contacts(),
        Action::Report => report(),
    }
}

fn run_demo<W: Write>(
    mut sink: W,
    cfg: GeomCfg,
    json: bool,
    out: Option<PathBuf>,
    random: u64,
    seed: u64,
) -> Result<()> {
    tracing::info!(?cfg, json, random, seed, "demo");
    let mut figures = demo::reference_figures(cfg)?;
    figures.extend(demo::random_figures(seed, random));
    let reports: Vec<FigureReport> = figures.iter().map(|f| FigureReport::of(f.as_ref())).collect();
    tracing::info!(figures = reports.len(), "built");

    if json {
        serde_json::to_writer_pretty(&mut sink, &reports)?;
        writeln!(sink)?;
    } else {
        writeln!(sink, "|======\n| Geometry figures\n|======")?;
        report::write_text(&mut sink, &reports)?;
    }

    if let Some(path) = out {
        let params = json!({
            "eps_parallel": cfg.eps_parallel,
            "eps_right_angle": cfg.eps_right_angle,
            "eps_midpoint": cfg.eps_midpoint,
            "random": random,
            "seed": seed,
        });
        let sidecar = provenance::write_json_with_sidecar(&path, &reports, params)?;
        tracing::info!(out = %path.display(), sidecar = %sidecar.display(), "wrote report");
    }
    Ok(())
}

fn measure(cfg: GeomCfg, args: FigureArgs) -> Result<()> {
    tracing::info!(?args, "measure");
    let figure = args.build(cfg).inspect_err(|e| tracing::warn!(error = %e, "construction failed"))?;
    let report = FigureReport::of(figure.as_ref());
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn contacts() -> Result<()> {
    tracing::info!("contacts");
    contacts::run_demo(io::stdout().lock())?;
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::Provenance::new(json!({}));
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn demo_json_matches_written_report_and_sidecar() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("figures.json");
        let mut printed = Vec::new();
        run_demo(&mut printed, GeomCfg::default(), true, Some(path.clone()), 3, 7).unwrap();

        let printed: Value = serde_json::from_slice(&printed).unwrap();
        assert_eq!(printed.as_array().unwrap().len(), 17 + 3);
        assert_eq!(printed[0]["kind"], "DOT");

        let written: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(written, printed);

        let sidecar_path = dir.path().join("out").join("figures.provenance.json");
        let sidecar: Value = serde_json::from_slice(&fs::read(sidecar_path).unwrap()).unwrap();
        assert_eq!(sidecar["params"]["seed"], 7);
        assert_eq!(sidecar["params"]["random"], 3);
        let eps = sidecar["params"]["eps_midpoint"].as_f64().unwrap();
        assert!((eps - 1e-9).abs() < 1e-18);
        assert_eq!(sidecar["outputs"][0], path.to_string_lossy().as_ref());
    }

    #[test]
    fn demo_text_lists_every_reference_figure() {
        let mut printed = Vec::new();
        run_demo(&mut printed, GeomCfg::exact(), false, None, 0, 0).unwrap();
        let text = String::from_utf8(printed).unwrap();
        assert!(text.starts_with("|======\n| Geometry figures\n|======\n"));
        assert_eq!(text.matches("Figure type:").count(), 17);
        assert!(text.contains("parallelogram: (vertexes=["));
    }
}
