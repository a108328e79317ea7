use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use blf::config::BLFConfig;
use blf::io;
use blf::io::cli::Cli;
use blf::io::export::export_solution;
use blf::io::output::Output;
use blf::io::svg_export::{View, session_to_svg};
use blf::stuff::Stuffer;
use clap::Parser;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BLFConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed BLFConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no usable name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let scenario = io::read_scenario(args.input_file.as_path())?;
    let (container, items) = io::import::import_scenario(&scenario)?;

    let mut stuffer = Stuffer::new(container, config);
    let report = stuffer.run(&items);

    {
        let output = Output {
            scenario,
            solution: export_solution(&stuffer.session, &report),
            config,
        };
        let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    for view in [View::Top, View::Side] {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}_{}.svg", view.suffix()));
        let svg = session_to_svg(&stuffer.session, view, config.svg_draw_options);
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
