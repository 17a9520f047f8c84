//! Build command implementation

use relpack::error::Result;

use super::helpers::os_reader;
use crate::cli::{BuildArgs, Cli};

/// Run build command
pub fn run(cli: &Cli, args: &BuildArgs) -> Result<()> {
    let reader = os_reader(cli);
    let package = reader.read(&cli.layout().package_dir(&args.package))?;

    let path = package.resource().build(&args.out)?;
    println!("{}", path.display());

    Ok(())
}
