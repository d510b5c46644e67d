//! The aggregation engine and dashboard assembly.
//!
//! Services are pure functions of the filtered view; no state is held across
//! calls. Each chart on the dashboard maps to one aggregation here.
//!
//! # Modules
//!
//! - [`aggregates`]: per-group means of the rental count
//! - [`correlation`]: Pearson correlation matrix over the numeric fields
//! - [`dashboard`]: one full pipeline pass producing every chart payload

pub mod aggregates;
pub mod correlation;
pub mod dashboard;


pub use aggregates::group_mean;
pub use correlation::{correlation_matrix, CorrelationMatrix};
pub use dashboard::{compute_dashboard, DashboardData};
