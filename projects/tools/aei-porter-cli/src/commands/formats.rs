use aei_porter_api::catalog;
use argh::FromArgs;

#[derive(FromArgs, Debug)]
/// List the compression formats this build can encode
#[argh(subcommand, name = "formats")]
pub struct FormatsCmd {}

pub fn handle_formats_command(_cmd: FormatsCmd) {
    for format in catalog::supported_formats() {
        println!("{format}");
    }
}
