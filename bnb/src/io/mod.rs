use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{LevelFilter, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use twinsack::entities::{BagId, Instance, Solution};
use twinsack::io::ext_repr::ExtInstance;

use crate::EPOCH;
use crate::config::BnBConfig;

pub mod cli;
pub mod output;

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    read_json(path).with_context(|| format!("could not read instance file: {}", path.display()))
}

pub fn read_config(path: &Path) -> Result<BnBConfig> {
    read_json(path).with_context(|| format!("incorrect config file: {}", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("solution written to {:?}", fs::canonicalize(path)?);
    Ok(())
}

/// Logs the contents of both bags and the total cost, or that no feasible solution exists.
pub fn log_report(instance: &Instance, solution: Option<&Solution>) {
    let Some(solution) = solution else {
        info!("No feasible solution found.");
        return;
    };
    info!("Optimal solution found:");
    for bag in BagId::ALL {
        info!(
            "{}'s bag ({}/{} kg): [{}]",
            instance.bag(bag).name,
            solution.weight(instance, bag),
            instance.capacity(bag),
            solution.items_in(instance, bag).join(", ")
        );
    }
    info!("Total cost: {}", solution.cost);
    info!("Total calories: {}", solution.calories);
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("time: {}", jiff::Timestamp::now());
    Ok(())
}
