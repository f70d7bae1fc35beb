//! propkit convert command

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct ConvertCommand {
    /// CSV file to read
    #[arg(short, long)]
    pub input: PathBuf,

    /// JSON file to write
    #[arg(short, long)]
    pub output: PathBuf,
}

impl ConvertCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let rows = tasks::convert::csv_to_json(&self.input, &self.output)?;
        println!(
            "Wrote {} row(s) to {}",
            console::style(rows).bold(),
            self.output.display()
        );
        Ok(())
    }
}
