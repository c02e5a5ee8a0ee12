use serde::{Deserialize, Serialize};

/// One user submission to the court's case search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseQuery {
    #[serde(default)]
    pub case_type: String,
    #[serde(default)]
    pub case_number: String,
    #[serde(default)]
    pub case_year: String,
}

impl CaseQuery {
    pub fn new(
        case_type: impl Into<String>,
        case_number: impl Into<String>,
        case_year: impl Into<String>,
    ) -> Self {
        Self {
            case_type: case_type.into().trim().to_string(),
            case_number: case_number.into().trim().to_string(),
            case_year: case_year.into().trim().to_string(),
        }
    }

    /// Short human label, e.g. `W.P.(C) 1234/2023`.
    pub fn label(&self) -> String {
        format!("{} {}/{}", self.case_type, self.case_number, self.case_year)
    }
}
