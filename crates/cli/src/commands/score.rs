//! propkit score command

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Args)]
pub struct ScoreCommand {
    /// JSON file holding an array of { "score", "weight" } objects
    #[arg(short, long)]
    pub input: PathBuf,
}

impl ScoreCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let total = tasks::scoring::weighted_total(&self.input)?;
        println!("Weighted total: {}", console::style(total).bold());
        Ok(())
    }
}
