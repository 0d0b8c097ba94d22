//! # Data Module
//!
//! Daily-log record types, CSV loading and input-file discovery.

mod loader;
mod record;

pub use loader::{latest_csv, DiaryTable};
pub use record::{parse_date, parse_duration_hours, parse_number, DailyRecord};
