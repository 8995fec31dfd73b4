use std::fs;

use anyhow::{Context, Result};
use bnb::config::BnBConfig;
use bnb::io::cli::Cli;
use bnb::io::output::BnBOutput;
use bnb::opt::BnBOptimizer;
use bnb::{EPOCH, io};
use clap::Parser as ClapParser;
use log::{info, warn};
use twinsack::io::{export, import};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BnBConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("Successfully parsed BnBConfig: {config:?}");

    let ext_instance = io::read_instance(&args.input_file)?;
    let instance = import(&ext_instance)?;

    let mut optimizer = BnBOptimizer::new(instance, config);
    let solution = optimizer.solve();

    io::log_report(&optimizer.instance, solution.as_ref());
    info!("Total time elapsed: {:.3}s", EPOCH.elapsed().as_secs_f64());

    if let Some(solution_folder) = args.solution_folder {
        fs::create_dir_all(&solution_folder).with_context(|| {
            format!("could not create solution folder: {solution_folder:?}")
        })?;

        let input_stem = args
            .input_file
            .file_stem()
            .and_then(|s| s.to_str())
            .context("input file has no valid file stem")?;

        let output = BnBOutput {
            instance: ext_instance,
            solution: export(&optimizer.instance, solution.as_ref(), *EPOCH),
            config,
            stats: optimizer.stats,
        };
        io::write_json(&output, &solution_folder.join(format!("sol_{input_stem}.json")))?;
    }

    Ok(())
}
