use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use panelizer::io::svg::candidate_to_svg;
use panelizer_cli::config::PanelizerPreset;
use panelizer_cli::io::cli::{Cli, parse_raw_args};
use panelizer_cli::{EPOCH, io, run};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    if args.preset.is_none() {
        warn!("[MAIN] No preset provided, using the built-in panel catalog and defaults");
    }
    let preset = PanelizerPreset::load(args.preset.as_deref(), args.local_preset.as_deref())?;
    let raw_args = parse_raw_args(&args.args)?;
    info!("[MAIN] form arguments: {raw_args:?}");

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!("could not create output folder: {}", args.output_folder.display())
        })?;
    }

    let output = run(&preset, &raw_args, args.all_candidates)?;
    io::write_json(&output, &args.output_folder.join("panelization.json"))?;

    match &output.summary.best {
        Some(best) => {
            let svg = candidate_to_svg(best, preset.svg_draw_options);
            io::write_svg(&svg, &args.output_folder.join("best_layout.svg"))?;
        }
        None => warn!("[MAIN] no feasible layout, no svg written"),
    }

    info!("[MAIN] {} ({:.3}s)", output.message, EPOCH.elapsed().as_secs_f64());
    Ok(())
}
