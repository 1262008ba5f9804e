use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ExistsStatus — purchasability of a product
// ---------------------------------------------------------------------------

/// Purchasability state reported by the search index.
///
/// Upstream sends a bare integer. Codes 0 and 1 are reserved and carry no
/// meaning; any code outside 0..=4 is kept as [`ExistsStatus::Unknown`] so
/// callers can tell it apart from a mapped state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum ExistsStatus {
    #[default]
    Reserved0,
    Reserved1,
    Available,
    OutOfStock,
    Discontinued,
    Unknown(i64),
}

impl ExistsStatus {
    /// The raw upstream code for this status.
    pub fn code(self) -> i64 {
        match self {
            ExistsStatus::Reserved0 => 0,
            ExistsStatus::Reserved1 => 1,
            ExistsStatus::Available => 2,
            ExistsStatus::OutOfStock => 3,
            ExistsStatus::Discontinued => 4,
            ExistsStatus::Unknown(code) => code,
        }
    }

    pub fn is_available(self) -> bool {
        self == ExistsStatus::Available
    }
}

impl From<i64> for ExistsStatus {
    fn from(code: i64) -> Self {
        match code {
            0 => ExistsStatus::Reserved0,
            1 => ExistsStatus::Reserved1,
            2 => ExistsStatus::Available,
            3 => ExistsStatus::OutOfStock,
            4 => ExistsStatus::Discontinued,
            other => ExistsStatus::Unknown(other),
        }
    }
}

impl From<ExistsStatus> for i64 {
    fn from(status: ExistsStatus) -> Self {
        status.code()
    }
}

// ---------------------------------------------------------------------------
// ImagePaths — one image in the fixed upstream sizes
// ---------------------------------------------------------------------------

/// Paths relative to the static-files base address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImagePaths {
    pub original: String,
    pub size70: String,
    pub size110: String,
    pub size180: String,
    pub size220: String,
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub title: String,
    pub hex: String,
    pub code: String,
}
