//! jobcost - job cost summary calculator with spreadsheet export
//!
//! Collects a job's registration details, hardware and wood cost breakout,
//! and markup, derives a six-line cost summary, and exports it as an Excel
//! workbook.
//!
//! # Architecture
//!
//! - `models`: form inputs, rounded money, and the summary record
//! - `services`: the summary calculator
//! - `session`: per-user form state that recomputes on every change
//! - `export`: XLSX (plus JSON/YAML) encoding of a summary
//! - `setup`: the interactive, step-by-step job form
//! - `display`: terminal formatting
//! - `audit`: append-only log of exports
//! - `config`: paths and user settings
//! - `cli`: command handlers for the `jobcost` binary
//!
//! # Example
//!
//! ```
//! use jobcost::models::{CostBreakout, PricingSetup};
//! use jobcost::services::SummaryCalculator;
//!
//! let breakout = CostBreakout { hw_deducts: 100.0, hw_adds: 50.0, labor_adds: 75.0, ..Default::default() };
//! let pricing = PricingSetup { hw_base_cost: 1000.0, wd_base_cost: 500.0, margin_percent: 20.0 };
//!
//! let summary = SummaryCalculator::compute(&breakout, &pricing, breakout.labor_adds);
//! assert_eq!(summary.final_total().to_string(), "$1815.00");
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod session;
pub mod setup;

pub use error::{JobCostError, JobCostResult};
