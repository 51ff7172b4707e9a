use std::fmt;
use std::str::FromStr;

/// Chinese romanization systems known to the mapping table.
///
/// Each variant owns one column of the mapping table; the column name is
/// also the textual form accepted by `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RomanizationSystem {
    HanyuPinyin,
    WadeGiles,
    Mps2,
    Yale,
    Tongyong,
}

impl RomanizationSystem {
    pub const ALL: [RomanizationSystem; 5] = [
        RomanizationSystem::HanyuPinyin,
        RomanizationSystem::WadeGiles,
        RomanizationSystem::Mps2,
        RomanizationSystem::Yale,
        RomanizationSystem::Tongyong,
    ];

    /// Column name in the mapping table.
    pub fn column(self) -> &'static str {
        match self {
            RomanizationSystem::HanyuPinyin => "hanyu",
            RomanizationSystem::WadeGiles => "wade",
            RomanizationSystem::Mps2 => "mps2",
            RomanizationSystem::Yale => "yale",
            RomanizationSystem::Tongyong => "tongyong",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RomanizationSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown romanization system: {0}")]
pub struct UnknownSystem(pub String);

impl FromStr for RomanizationSystem {
    type Err = UnknownSystem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RomanizationSystem::ALL
            .into_iter()
            .find(|sys| sys.column().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSystem(s.to_string()))
    }
}
