use crate::cli::BuildArgs;
use crate::config::PartialPolymerConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use genpoly::{
    core::io::{lt::LtFile, raw, traits::TopologyWriter},
    engine::progress::ProgressReporter,
    workflows,
};
use nalgebra::Point3;
use std::io::{self, BufWriter, Write};
use tracing::info;

/// Reads the curve, assembles the polymer and writes it as a moltemplate object.
pub fn run(args: BuildArgs, quiet: bool) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialPolymerConfig::from_file(path)?,
        None => PartialPolymerConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_cli(&args)?;

    let coordinates = read_coordinates(&args)?;

    let progress_handler = CliProgressHandler::new(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core assembly workflow...");
    let assembly = workflows::assemble::run(&coordinates, &final_config, &reporter)?;

    match &args.output {
        Some(path) => {
            info!("Writing topology to {:?}", path);
            LtFile::write_to_path(&assembly, path)?;
            if !quiet {
                eprintln!(
                    "✓ Polymer '{}' ({} chain(s), {} monomer(s)) written to: {}",
                    assembly.polymer_name,
                    assembly.chains().len(),
                    coordinates.len(),
                    path.display()
                );
            }
        }
        None => {
            info!("Writing topology to standard output");
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            LtFile::write_to(&assembly, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

fn read_coordinates(args: &BuildArgs) -> Result<Vec<Point3<f64>>> {
    match &args.input {
        Some(path) => {
            info!("Loading curve coordinates from {:?}", path);
            raw::read_coordinates_from_path(path).map_err(|e| CliError::parsing(path, e))
        }
        None => {
            info!("Loading curve coordinates from standard input");
            raw::read_coordinates(&mut io::stdin().lock())
                .map_err(|e| CliError::parsing("<stdin>", e))
        }
    }
}
