//! Route-specific data types.
//!
//! Each submodule holds the serializable payloads produced by one family of
//! dashboard endpoints. The aggregation logic lives in [`crate::services`].

pub mod bins;
pub mod dashboard;
pub mod monthly;
pub mod summary;

#[cfg(test)]
mod tests {
    #[test]
    fn test_route_paths() {
        assert_eq!(super::summary::GET_SUMMARY, "/v1/summary");
        assert_eq!(super::summary::GET_YEARLY, "/v1/yearly");
        assert_eq!(super::monthly::GET_MONTHLY, "/v1/monthly");
        assert_eq!(super::bins::GET_BINS, "/v1/bins");
        assert_eq!(super::dashboard::GET_DASHBOARD, "/v1/dashboard");
        assert_eq!(super::dashboard::GET_CHART, "/v1/charts/{chart}");
    }
}
