use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Benchmark suite versions with published auxiliary-data layout rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuiteVersion {
    Cec2014,
    Cec2015,
    Cec2017,
    Cec2019,
    Cec2021,
    Cec2022,
}

static VERSION_TAGS: Map<&'static str, SuiteVersion> = phf_map! {
    "cec2014" => SuiteVersion::Cec2014,
    "cec2015" => SuiteVersion::Cec2015,
    "cec2017" => SuiteVersion::Cec2017,
    "cec2019" => SuiteVersion::Cec2019,
    "cec2021" => SuiteVersion::Cec2021,
    "cec2022" => SuiteVersion::Cec2022,
};

/// Requested (version, function) pair has no published sizing rule.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no sizing rule for {version} function {function_id}")]
pub struct UnsupportedVersion {
    pub version: SuiteVersion,
    pub function_id: u32,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown benchmark version tag '{0}'")]
pub struct UnknownVersionTag(pub String);

/// Component counts for the 2015 suite, indexed by function id. This version
/// has no threshold; every function carries its own published count.
const CEC2015_COMPONENTS: [usize; 16] = [0, 1, 1, 1, 1, 1, 1, 1, 1, 3, 3, 5, 5, 5, 7, 10];

enum Sizing {
    /// Functions below `threshold` use one data block, the rest use `coeff`.
    Threshold { threshold: u32, coeff: usize },
    /// The block count is read from a per-function table.
    PerFunction(&'static [usize]),
}

impl SuiteVersion {
    /// Directory name for this version under the data root.
    pub fn dir_tag(self) -> &'static str {
        match self {
            SuiteVersion::Cec2014 => "cec2014",
            SuiteVersion::Cec2015 => "cec2015",
            SuiteVersion::Cec2017 => "cec2017",
            SuiteVersion::Cec2019 => "cec2019",
            SuiteVersion::Cec2021 => "cec2021",
            SuiteVersion::Cec2022 => "cec2022",
        }
    }

    fn sizing(self) -> Sizing {
        match self {
            SuiteVersion::Cec2014 => Sizing::Threshold { threshold: 23, coeff: 10 },
            SuiteVersion::Cec2015 => Sizing::PerFunction(&CEC2015_COMPONENTS),
            SuiteVersion::Cec2017 => Sizing::Threshold { threshold: 20, coeff: 10 },
            SuiteVersion::Cec2019 => Sizing::Threshold { threshold: 100, coeff: 1 },
            SuiteVersion::Cec2021 => Sizing::Threshold { threshold: 7, coeff: 10 },
            SuiteVersion::Cec2022 => Sizing::Threshold { threshold: 9, coeff: 12 },
        }
    }

    /// Number of stacked data blocks backing this function: one below the
    /// version threshold, the version coefficient at or above it.
    pub fn component_count(self, function_id: u32) -> Result<usize, UnsupportedVersion> {
        match self.sizing() {
            Sizing::Threshold { threshold, coeff } => {
                Ok(if function_id < threshold { 1 } else { coeff })
            }
            Sizing::PerFunction(table) => table
                .get(function_id as usize)
                .copied()
                .filter(|&count| count > 0)
                .ok_or(UnsupportedVersion { version: self, function_id }),
        }
    }

    /// Maximum block count for this version, used to size shuffle data for
    /// functions outside the shuffled range.
    fn coefficient(self, function_id: u32) -> Result<usize, UnsupportedVersion> {
        match self.sizing() {
            Sizing::Threshold { coeff, .. } => Ok(coeff),
            Sizing::PerFunction(_) => self.component_count(function_id),
        }
    }

    /// Whether this function reads its inputs through a shuffle permutation.
    pub fn is_shuffled(self, function_id: u32) -> bool {
        let range = match self {
            SuiteVersion::Cec2014 => 17..=22,
            SuiteVersion::Cec2017 => 11..=20,
            SuiteVersion::Cec2021 => 5..=7,
            SuiteVersion::Cec2022 => 6..=8,
            SuiteVersion::Cec2015 | SuiteVersion::Cec2019 => return false,
        };
        range.contains(&function_id)
    }

    /// Expected element count of the rotation data file.
    pub fn matrix_len(
        self,
        function_id: u32,
        dimension: usize,
    ) -> Result<usize, UnsupportedVersion> {
        Ok(dimension * dimension * self.component_count(function_id)?)
    }

    /// Expected element count of the shift data file.
    pub fn shift_len(
        self,
        function_id: u32,
        dimension: usize,
    ) -> Result<usize, UnsupportedVersion> {
        Ok(dimension * self.component_count(function_id)?)
    }

    /// Expected element count of the shuffle data file.
    pub fn shuffle_len(
        self,
        function_id: u32,
        dimension: usize,
    ) -> Result<usize, UnsupportedVersion> {
        if self.is_shuffled(function_id) {
            Ok(dimension)
        } else {
            Ok(dimension * self.coefficient(function_id)?)
        }
    }
}

impl fmt::Display for SuiteVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_tag())
    }
}

impl FromStr for SuiteVersion {
    type Err = UnknownVersionTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VERSION_TAGS
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| UnknownVersionTag(s.to_string()))
    }
}
