//! Parsers for the daily usage dataset.
//!
//! # Parsers
//!
//! - [`csv_parser`]: Parse the row-oriented `day.csv` file into a [`Dataset`]
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_dashboard::parsing::csv_parser::parse_usage_csv;
//! use std::path::Path;
//!
//! let dataset = parse_usage_csv(Path::new("day.csv"))
//!     .expect("Failed to load dataset");
//! ```
//!
//! [`Dataset`]: crate::models::Dataset

pub mod csv_parser;


pub use csv_parser::{parse_date, parse_usage_csv, parse_usage_reader};
