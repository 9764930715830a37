use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use svg::Document;

use crate::EPOCH;

pub mod cli;
pub mod output;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("could not open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("could not parse file: {}", path.display()))
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("could not open output file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write output file: {}", path.display()))?;

    info!("[IO] output written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document).with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("[IO] svg written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let elapsed = EPOCH.elapsed();
            let target = record.target().rsplit("::").next().unwrap_or_default();
            out.finish(format_args!(
                "{:>5}.{:03}s {:<5} {:<10} {message}",
                elapsed.as_secs(),
                elapsed.subsec_millis(),
                record.level(),
                target,
            ))
        })
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()
        .context("could not initialize logger")?;
    info!("[MAIN] started at {}", jiff::Zoned::now().strftime("%Y-%m-%d %H:%M:%S %Z"));
    Ok(())
}
