//! CLI Commands

pub mod budget;
pub mod convert;
pub mod demo;
pub mod groups;
pub mod score;

pub use budget::BudgetCommand;
pub use convert::ConvertCommand;
pub use demo::DemoCommand;
pub use groups::GroupsCommand;
pub use score::ScoreCommand;
