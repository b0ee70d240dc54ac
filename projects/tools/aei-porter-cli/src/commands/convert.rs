//! The three conversion subcommands, all thin wrappers over the
//! orchestrator.

use aei_porter_api::{
    orchestrator, BatchReport, ConversionMode, ConversionOutcome, ConversionRequest, RequestError,
};
use argh::FromArgs;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Export the textures of AEI container(s) as PNG files
#[argh(subcommand, name = "aei2png")]
pub struct Aei2PngCmd {
    /// source .aei file, or a folder of them with --folder
    #[argh(positional)]
    pub source: PathBuf,

    /// destination folder for the PNG files
    #[argh(option, short = 'o')]
    pub output: PathBuf,

    /// convert every .aei file in the source folder
    #[argh(switch)]
    pub folder: bool,

    /// replace existing output files instead of skipping them
    #[argh(switch)]
    pub overwrite: bool,

    /// print one line per converted, skipped or failed item
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

#[derive(FromArgs, Debug)]
/// Pack PNG image(s) into AEI containers under a chosen compression format
#[argh(subcommand, name = "png2aei")]
pub struct Png2AeiCmd {
    /// source .png file, or a folder of them with --folder
    #[argh(positional)]
    pub source: PathBuf,

    /// destination folder for the containers
    #[argh(option, short = 'o')]
    pub output: PathBuf,

    /// compression format name (see the formats subcommand)
    #[argh(option, short = 'f')]
    pub format: String,

    /// convert every .png file in the source folder
    #[argh(switch)]
    pub folder: bool,

    /// replace existing output files instead of skipping them
    #[argh(switch)]
    pub overwrite: bool,

    /// print one line per converted, skipped or failed item
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

#[derive(FromArgs, Debug)]
/// Re-compress AEI container(s) under a different compression format
#[argh(subcommand, name = "aei2aei")]
pub struct Aei2AeiCmd {
    /// source .aei file, or a folder of them with --folder
    #[argh(positional)]
    pub source: PathBuf,

    /// destination folder for the re-compressed containers
    #[argh(option, short = 'o')]
    pub output: PathBuf,

    /// compression format name (see the formats subcommand)
    #[argh(option, short = 'f')]
    pub format: String,

    /// convert every .aei file in the source folder
    #[argh(switch)]
    pub folder: bool,

    /// replace existing output files instead of skipping them
    #[argh(switch)]
    pub overwrite: bool,

    /// print one line per converted, skipped or failed item
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

pub fn handle_aei2png_command(cmd: Aei2PngCmd) -> Result<(), RequestError> {
    execute(ConversionRequest {
        mode: ConversionMode::ContainerToImage,
        source: cmd.source,
        dest_folder: cmd.output,
        format: None,
        folder: cmd.folder,
        overwrite: cmd.overwrite,
        verbose: cmd.verbose,
    })
}

pub fn handle_png2aei_command(cmd: Png2AeiCmd) -> Result<(), RequestError> {
    execute(ConversionRequest {
        mode: ConversionMode::ImageToContainer,
        source: cmd.source,
        dest_folder: cmd.output,
        format: Some(cmd.format),
        folder: cmd.folder,
        overwrite: cmd.overwrite,
        verbose: cmd.verbose,
    })
}

pub fn handle_aei2aei_command(cmd: Aei2AeiCmd) -> Result<(), RequestError> {
    execute(ConversionRequest {
        mode: ConversionMode::ContainerToContainer,
        source: cmd.source,
        dest_folder: cmd.output,
        format: Some(cmd.format),
        folder: cmd.folder,
        overwrite: cmd.overwrite,
        verbose: cmd.verbose,
    })
}

fn execute(request: ConversionRequest) -> Result<(), RequestError> {
    let report = orchestrator::run(&request)?;
    print_report(&report, request.verbose);
    Ok(())
}

fn print_report(report: &BatchReport, verbose: bool) {
    if verbose {
        for entry in report.entries() {
            match &entry.outcome {
                ConversionOutcome::Converted(paths) => {
                    for path in paths {
                        println!(
                            "Converted {} -> {}",
                            entry.source.display(),
                            path.display()
                        );
                    }
                }
                ConversionOutcome::Skipped(reason) => {
                    println!("Skipping {} ({reason})", entry.source.display());
                }
                ConversionOutcome::Failed(message) => {
                    eprintln!("Failed {}: {message}", entry.source.display());
                }
            }
        }
    }

    println!("Converted {} file(s)", report.converted());
    if report.failed_items() > 0 {
        println!("{} item(s) failed", report.failed_items());
    }
}
