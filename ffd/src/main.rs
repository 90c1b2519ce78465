use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};

use ffd::config::FFDConfig;
use ffd::ffd_optimizer::FFDOptimizer;
use ffd::io::cli::Cli;
use ffd::io::layout_to_svg::solution_to_svg;
use ffd::io::output::FFDOutput;
use ffd::{EPOCH, io};
use optishape::io::export;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: FFDConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FFDConfig::default()
        }
        Some(config_file) => io::read_json(&config_file).context("incorrect config file format")?,
    };

    info!("[MAIN] Successfully parsed FFDConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let optimizer = FFDOptimizer::new(&ext_instance, &config.nest)?;
    let solution = optimizer.solve()?;

    {
        let output = FFDOutput {
            instance: ext_instance,
            solution: export::export_solution(&solution),
            config: config.clone(),
            run_time_ms: EPOCH.elapsed().as_millis() as u64,
        };
        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.svg"));
        let svg = solution_to_svg(&optimizer.sheet, &solution, config.svg_draw_options);
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
