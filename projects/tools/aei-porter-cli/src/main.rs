mod commands;

use argh::FromArgs;
use std::error::Error;

#[derive(FromArgs, Debug)]
/// Converter between AEI packed-texture containers and PNG images
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Aei2Png(commands::convert::Aei2PngCmd),
    Png2Aei(commands::convert::Png2AeiCmd),
    Aei2Aei(commands::convert::Aei2AeiCmd),
    Formats(commands::formats::FormatsCmd),
    Identify(commands::identify::IdentifyCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Aei2Png(cmd) => {
            commands::convert::handle_aei2png_command(cmd)?;
        }
        Commands::Png2Aei(cmd) => {
            commands::convert::handle_png2aei_command(cmd)?;
        }
        Commands::Aei2Aei(cmd) => {
            commands::convert::handle_aei2aei_command(cmd)?;
        }
        Commands::Formats(cmd) => {
            commands::formats::handle_formats_command(cmd);
        }
        Commands::Identify(cmd) => {
            commands::identify::handle_identify_command(cmd)?;
        }
    }

    Ok(())
}
