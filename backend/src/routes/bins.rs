use serde::{Deserialize, Serialize};

// =========================================================
// Binning types + route
// =========================================================

/// Weather covariate that gets bucketed into named bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Covariate {
    Temperature,
    Humidity,
    Windspeed,
}

impl Covariate {
    pub const ALL: [Covariate; 3] = [
        Covariate::Temperature,
        Covariate::Humidity,
        Covariate::Windspeed,
    ];

    /// Ordered bin labels; the number of labels is the number of bins.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Covariate::Temperature => &["Low", "Medium", "High"],
            Covariate::Humidity => &["Low", "Moderate", "High", "Very high"],
            Covariate::Windspeed => &["Fresh Breeze", "Moderate Breeze", "Strong Breeze"],
        }
    }

    pub fn bin_count(&self) -> usize {
        self.labels().len()
    }

    /// Chart title for the covariate's panel.
    pub fn title(&self) -> &'static str {
        match self {
            Covariate::Temperature => "Temperature Bins",
            Covariate::Humidity => "Humidity Bins",
            Covariate::Windspeed => "Windspeed Bins",
        }
    }
}

/// Number of records that fell in one labeled bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinCount {
    pub label: String,
    /// Lower edge (exclusive, except for the first bin)
    pub lower: f64,
    /// Upper edge (inclusive)
    pub upper: f64,
    pub count: usize,
}

/// Bin counts for one covariate, ordered by label rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinnedCategory {
    pub covariate: Covariate,
    pub bins: Vec<BinCount>,
}

impl BinnedCategory {
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Route path for the binning endpoint
pub const GET_BINS: &str = "/v1/bins";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_counts_per_covariate() {
        assert_eq!(Covariate::Temperature.bin_count(), 3);
        assert_eq!(Covariate::Humidity.bin_count(), 4);
        assert_eq!(Covariate::Windspeed.bin_count(), 3);
    }

    #[test]
    fn test_covariate_serializes_snake_case() {
        let json = serde_json::to_string(&Covariate::Windspeed).unwrap();
        assert_eq!(json, "\"windspeed\"");
    }
}
