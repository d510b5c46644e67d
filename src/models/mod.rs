//! Domain types for rental observations and filter state.
//!
//! # Modules
//!
//! - [`record`]: raw and derived rental observations
//! - [`filter`]: the user's filter selection and the selectable options

pub mod filter;
pub mod record;

pub use filter::{FilterOptions, FilterSelection, HourRange, WorkingDayChoice};
pub use record::{DayPeriod, DerivedRecord, Record};
