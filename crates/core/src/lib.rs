use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Query mode selected in the search form.
///
/// Each mode maps onto one operator of the search API
/// (`/api/query/{op}/{query}`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Equations containing any of the query words.
    #[default]
    Normal,
    /// Equations containing the whole query verbatim.
    Exact,
    /// Equations not containing the query.
    Not,
    /// Query is a regular expression.
    Regex,
}

impl SearchType {
    pub const ALL: [SearchType; 4] = [
        SearchType::Normal,
        SearchType::Exact,
        SearchType::Not,
        SearchType::Regex,
    ];

    /// Form value, as written into the `search-type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchType::Normal => "normal",
            SearchType::Exact => "exact",
            SearchType::Not => "not",
            SearchType::Regex => "regex",
        }
    }

    /// Operator segment used by the query route.
    pub fn op(self) -> &'static str {
        match self {
            SearchType::Normal => "~",
            SearchType::Exact => "=",
            SearchType::Not => "!",
            SearchType::Regex => "r",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search type: {0:?}")]
pub struct UnknownSearchType(pub String);

impl FromStr for SearchType {
    type Err = UnknownSearchType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SearchType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownSearchType(s.to_string()))
    }
}

/// Error categories for programmatic handling
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Element, form or form field missing from the page
    ElementNotFound,
    /// Selector or markup could not be parsed
    Parsing,
    /// Page configuration could not be loaded
    Config,
}

/// Failures while resolving the elements a page helper operates on.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("Form not found: form#{form_id}")]
    FormNotFound { form_id: String },

    #[error("Field {name:?} not found in form#{form_id}")]
    FieldNotFound { form_id: String, name: String },

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl PageError {
    pub fn element_not_found(selector: impl Into<String>) -> Self {
        Self::ElementNotFound {
            selector: selector.into(),
        }
    }

    pub fn field_not_found(form_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::FieldNotFound {
            form_id: form_id.into(),
            name: name.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PageError::ElementNotFound { .. }
            | PageError::FormNotFound { .. }
            | PageError::FieldNotFound { .. } => ErrorCategory::ElementNotFound,
            PageError::Selector(_) => ErrorCategory::Parsing,
            PageError::Config(_) => ErrorCategory::Config,
        }
    }
}

/// Text input whose displayed value can be replaced.
pub trait TextInput {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// Checkbox-like control.
pub trait Toggle {
    fn is_checked(&self) -> bool;
}

/// Any form field accepting a value (input, select, textarea).
pub trait ValueField {
    fn set_value(&self, value: &str);
}

/// Source of uniformly distributed floats in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_type_round_trips_through_form_value() {
        for t in SearchType::ALL {
            assert_eq!(t.as_str().parse::<SearchType>().unwrap(), t);
            assert_eq!(t.to_string(), t.as_str());
        }
        assert!("fuzzy".parse::<SearchType>().is_err());
    }

    #[test]
    fn query_route_operators() {
        let ops: Vec<_> = SearchType::ALL.into_iter().map(SearchType::op).collect();
        assert_eq!(ops, ["~", "=", "!", "r"]);
    }

    #[test]
    fn search_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SearchType::Regex).unwrap(), "\"regex\"");
        let t: SearchType = serde_json::from_str("\"normal\"").unwrap();
        assert_eq!(t, SearchType::default());
    }

    #[test]
    fn missing_elements_are_element_not_found() {
        let err = PageError::field_not_found("search", "regex");
        assert_eq!(err.category(), ErrorCategory::ElementNotFound);
        assert_eq!(err.to_string(), "Field \"regex\" not found in form#search");
        assert_eq!(
            PageError::element_not_found("#search-field").to_string(),
            "Element not found: #search-field"
        );
        assert_eq!(PageError::Selector("!!".into()).category(), ErrorCategory::Parsing);
    }
}
