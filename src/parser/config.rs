use regex::Regex;

/// Label vocabulary of the full extractor, in match order.
pub const DEFAULT_LABELS: [&str; 13] = [
    "petitioner",
    "respondent",
    "party",
    "parties",
    "next hearing",
    "next date",
    "hearing",
    "filing date",
    "filed on",
    "order",
    "judgment",
    "judgement",
    "order date",
];

/// Vocabulary of the reduced variant that only collects label snippets and dates.
pub const BASIC_LABELS: [&str; 6] = [
    "petitioner",
    "respondent",
    "party",
    "hearing",
    "judgment",
    "order",
];

pub const DEFAULT_DATE_PATTERN: &str = r"\b\d{1,2}[-/]\d{1,2}[-/]\d{2,4}\b";
pub const DEFAULT_PARTIES_PATTERN: &str = r"(?i)\b(vs|v\.|versus|v)\b";

/// Everything the extractor needs, passed in per call.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Lowercase keywords tested against each line.
    pub labels: Vec<String>,
    /// Number of consecutive lines joined into a snippet, starting at the match.
    pub snippet_window: usize,
    pub date_pattern: Regex,
    pub max_dates: usize,
    pub extract_links: bool,
    pub detect_parties: bool,
    pub parties_pattern: Regex,
    pub parties_scan_lines: usize,
    pub include_top_text: bool,
    pub top_text_lines: usize,
}

fn builtin(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern compiles")
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
            snippet_window: 3,
            date_pattern: builtin(DEFAULT_DATE_PATTERN),
            max_dates: 5,
            extract_links: true,
            detect_parties: true,
            parties_pattern: builtin(DEFAULT_PARTIES_PATTERN),
            parties_scan_lines: 400,
            include_top_text: true,
            top_text_lines: 30,
        }
    }
}

impl ExtractorConfig {
    /// The reduced heuristics: six labels and dates, nothing else.
    pub fn basic() -> Self {
        Self {
            labels: BASIC_LABELS.iter().map(|s| s.to_string()).collect(),
            extract_links: false,
            detect_parties: false,
            include_top_text: false,
            ..Self::default()
        }
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.labels = labels
            .into_iter()
            .map(|label| label.as_ref().to_lowercase())
            .collect();
        self
    }

    pub fn with_snippet_window(mut self, window: usize) -> Self {
        self.snippet_window = window.max(1);
        self
    }

    pub fn with_date_pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.date_pattern = Regex::new(pattern)?;
        Ok(self)
    }

    pub fn with_max_dates(mut self, max: usize) -> Self {
        self.max_dates = max;
        self
    }

    pub fn with_top_text_lines(mut self, lines: usize) -> Self {
        self.top_text_lines = lines;
        self
    }
}
