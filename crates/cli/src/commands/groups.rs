//! propkit groups command

use clap::Args;

#[derive(Debug, Args)]
pub struct GroupsCommand {
    /// First group, names joined by the separator
    #[arg(long)]
    pub first: String,

    /// Second group, names joined by the separator
    #[arg(long)]
    pub second: String,

    /// Separator between names
    #[arg(long, default_value_t = ',')]
    pub separator: char,
}

impl GroupsCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let matches = tasks::groups::common_participants(&self.first, &self.second, self.separator);
        if matches.is_empty() {
            println!("No common members.");
        } else {
            for name in matches {
                println!("{name}");
            }
        }
        Ok(())
    }
}
