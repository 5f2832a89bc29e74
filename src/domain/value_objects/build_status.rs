//! BuildStatus value object - the state the build tool last reported

pub const BUILDING_STATUS: &str = "building";
pub const BUILT_STATUS: &str = "built";
pub const ERRORS_STATUS: &str = "errors";

/// Status recorded in a manifest file.
///
/// `Building` is the only non-terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStatus {
    Building,
    Built,
    Errors,
    /// Missing or unrecognized status string
    Unknown(Option<String>),
}

impl BuildStatus {
    /// Classify the raw `status` field
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(BUILDING_STATUS) => BuildStatus::Building,
            Some(BUILT_STATUS) => BuildStatus::Built,
            Some(ERRORS_STATUS) => BuildStatus::Errors,
            other => BuildStatus::Unknown(other.map(str::to_string)),
        }
    }

    pub fn is_building(&self) -> bool {
        matches!(self, BuildStatus::Building)
    }

    /// Raw status string, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            BuildStatus::Building => Some(BUILDING_STATUS),
            BuildStatus::Built => Some(BUILT_STATUS),
            BuildStatus::Errors => Some(ERRORS_STATUS),
            BuildStatus::Unknown(raw) => raw.as_deref(),
        }
    }
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().unwrap_or("null"))
    }
}
