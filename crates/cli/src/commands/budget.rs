//! propkit budget command

use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct BudgetCommand {
    #[command(subcommand)]
    pub command: BudgetSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum BudgetSubcommand {
    /// How many months the cushion lasts before going into debt
    Runway {
        /// Savings at the start
        #[arg(long)]
        capital: f64,
        /// Monthly salary
        #[arg(long)]
        salary: f64,
        /// Spend in the first month
        #[arg(long)]
        spend: f64,
        /// Monthly spend growth rate (e.g. 0.05 for 5%)
        #[arg(long, default_value_t = 0.0)]
        increase: f64,
    },
    /// Cushion needed to survive a number of months
    Cushion {
        /// Monthly salary
        #[arg(long)]
        salary: f64,
        /// Spend in the first month
        #[arg(long)]
        spend: f64,
        /// Months to survive
        #[arg(long)]
        months: u32,
        /// Monthly spend growth rate (e.g. 0.03 for 3%)
        #[arg(long, default_value_t = 0.0)]
        increase: f64,
    },
}

impl BudgetCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.command {
            BudgetSubcommand::Runway {
                capital,
                salary,
                spend,
                increase,
            } => {
                let months = tasks::budget::months_before_broke(*capital, *salary, *spend, *increase)?;
                println!(
                    "Months covered without going into debt: {}",
                    console::style(months).bold()
                );
            }
            BudgetSubcommand::Cushion {
                salary,
                spend,
                months,
                increase,
            } => {
                let cushion = tasks::budget::required_cushion(*salary, *spend, *months, *increase)?;
                println!(
                    "Cushion needed for {} months: {}",
                    months,
                    console::style(cushion).bold()
                );
            }
        }
        Ok(())
    }
}
