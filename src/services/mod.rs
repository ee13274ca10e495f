//! Service layer for jobcost
//!
//! Pure business logic over explicit inputs. Nothing here touches the disk.

pub mod summary;

pub use summary::{SummaryCalculator, SummaryTotals};
