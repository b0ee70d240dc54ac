use aei_porter_api::{sniffer, IdentifyError};
use argh::FromArgs;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Report a container's compression format from its header byte
#[argh(subcommand, name = "identify")]
pub struct IdentifyCmd {
    /// the .aei file to inspect
    #[argh(positional)]
    pub file: PathBuf,
}

pub fn handle_identify_command(cmd: IdentifyCmd) -> Result<(), IdentifyError> {
    let (format, mipmapped) = sniffer::identify(&cmd.file)?;
    println!(
        "Format: {format}{}",
        if mipmapped { " (mipmapped)" } else { "" }
    );
    Ok(())
}
