//! Service layer: the aggregation computations behind the dashboard.
//!
//! Every service is a pure function over the loaded records. The HTTP layer
//! calls them on each request and never caches the results.

pub mod binning;
pub mod dashboard;
pub mod monthly;
pub mod totals;


pub use binning::{bin_all, bin_covariate};
pub use dashboard::{compute_dashboard, dataset_summary};
pub use monthly::{last_n_months, resample_monthly};
pub use totals::{compute_grand_totals, compute_summary, compute_usage_shares, compute_yearly_totals};
