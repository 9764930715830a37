use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use log::LevelFilter;
use panelizer::io::ext_repr::RawArgs;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Base preset, the built-in one is used if omitted
    #[arg(short, long, value_name = "FILE")]
    pub preset: Option<PathBuf>,
    /// Overrides applied on top of the base preset
    #[arg(long, value_name = "FILE")]
    pub local_preset: Option<PathBuf>,
    /// Form argument, e.g. `--arg CBW=100` (repeatable)
    #[arg(short, long = "arg", value_name = "KEY=VALUE")]
    pub args: Vec<String>,
    #[arg(short, long, value_name = "FOLDER")]
    pub output_folder: PathBuf,
    /// Also write every evaluated candidate, infeasible ones included
    #[arg(long)]
    pub all_candidates: bool,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

/// Collects `KEY=VALUE` pairs into form arguments. A later pair overrides an earlier one with the same key.
pub fn parse_raw_args(pairs: &[String]) -> Result<RawArgs> {
    pairs
        .iter()
        .map(|pair| {
            let (key, value) = pair
                .split_once('=')
                .with_context(|| format!("form argument {pair:?} is not of the form KEY=VALUE"))?;
            let key = key.trim();
            ensure!(!key.is_empty(), "form argument {pair:?} has an empty key");
            Ok((key.to_string(), value.to_string()))
        })
        .collect()
}
