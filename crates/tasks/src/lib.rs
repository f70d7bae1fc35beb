//! # Propkit Tasks
//!
//! Small standalone computations, each independent of the others and of the
//! domain entities:
//!
//! - [`budget`] - how long a financial cushion lasts, and how big one must be
//! - [`groups`] - sorted intersection of two delimiter-joined member lists
//! - [`convert`] - CSV file to pretty-printed JSON file
//! - [`scoring`] - weighted-score totaling over a JSON array

pub mod budget;
pub mod convert;
pub mod groups;
pub mod scoring;
