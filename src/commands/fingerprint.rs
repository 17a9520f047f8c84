//! Fingerprint command implementation

use relpack::error::Result;
use relpack::package::PackageSummary;

use super::helpers::os_reader;
use crate::cli::{Cli, FingerprintArgs};

/// Run fingerprint command
pub fn run(cli: &Cli, args: &FingerprintArgs) -> Result<()> {
    let layout = cli.layout();
    let reader = os_reader(cli);

    let names = if args.packages.is_empty() {
        layout.package_names()?
    } else {
        args.packages.clone()
    };

    let mut summaries = Vec::with_capacity(names.len());
    for name in &names {
        let package = reader.read(&layout.package_dir(name))?;
        summaries.push(PackageSummary::from(&package));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for summary in &summaries {
            println!("{} {}", summary.name, summary.fingerprint);
        }
    }

    Ok(())
}
