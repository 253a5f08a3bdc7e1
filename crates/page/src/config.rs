use serde::Deserialize;
use tode_core::PageError;

/// Names the elements the search page helpers operate on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `id` of the visible search input.
    pub search_input_id: String,
    /// `id` of the search form.
    pub form_id: String,
    /// Name of the regex checkbox inside the form.
    pub regex_field: String,
    /// Name of the search-type field inside the form.
    pub search_type_field: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            search_input_id: "search-field".to_string(),
            form_id: "search".to_string(),
            regex_field: "regex".to_string(),
            search_type_field: "search-type".to_string(),
        }
    }
}

impl PageConfig {
    /// Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_search_input(mut self, id: impl Into<String>) -> Self {
        self.search_input_id = id.into();
        self
    }

    pub fn with_form(mut self, id: impl Into<String>) -> Self {
        self.form_id = id.into();
        self
    }

    pub fn with_regex_field(mut self, name: impl Into<String>) -> Self {
        self.regex_field = name.into();
        self
    }

    pub fn with_search_type_field(mut self, name: impl Into<String>) -> Self {
        self.search_type_field = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tode_core::ErrorCategory;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PageConfig::from_json(r#"{ "form_id": "query" }"#).unwrap();
        assert_eq!(config, PageConfig::default().with_form("query"));
        assert_eq!(config.search_input_id, "search-field");
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = PageConfig::from_json("{ form_id: ").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Config);
    }
}
