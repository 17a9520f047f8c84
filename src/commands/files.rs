//! Files command implementation

use relpack::error::Result;

use super::helpers::os_reader;
use crate::cli::{Cli, FilesArgs};

/// Run files command
pub fn run(cli: &Cli, args: &FilesArgs) -> Result<()> {
    let reader = os_reader(cli);
    let collected = reader.collect(&cli.layout().package_dir(&args.package))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&collected.files)?);
        return Ok(());
    }

    for file in &collected.files {
        let marker = if file.exclude_mode { " (mode excluded)" } else { "" };
        println!("{:<8} {}{}", file.root.to_string(), file.relative_path, marker);
    }

    Ok(())
}
