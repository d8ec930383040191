//! List configuration.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ListError, Result};
use listkit_core::logging::targets;

/// Default name of the selection field.
pub const DEFAULT_SELECTED_PROP: &str = "isSelected";

/// Default name of the filter-match field.
pub const DEFAULT_MATCHED_PROP: &str = "isMatched";

/// Names of the reserved fields a [`ListState`](super::ListState) maintains
/// on every item.
///
/// Options are captured once when the list state is created. Empty names fall
/// back to the defaults.
///
/// # Example
///
/// ```
/// use listkit::model::ListOptions;
///
/// let options = ListOptions::new().selected_prop("chosen");
/// assert_eq!(options.selected_field(), "chosen");
/// assert_eq!(options.matched_field(), "isMatched");
///
/// let options = ListOptions::from_toml_str("selectedProp = \"picked\"").unwrap();
/// assert_eq!(options.selected_field(), "picked");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListOptions {
    /// Field holding the selection state.
    #[serde(alias = "selectedProp")]
    pub selected_prop: String,
    /// Field holding the filter-match state.
    #[serde(alias = "matchedProp")]
    pub matched_prop: String,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            selected_prop: DEFAULT_SELECTED_PROP.to_string(),
            matched_prop: DEFAULT_MATCHED_PROP.to_string(),
        }
    }
}

impl ListOptions {
    /// Creates options with the default field names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selection field name.
    pub fn selected_prop(mut self, name: impl Into<String>) -> Self {
        self.selected_prop = name.into();
        self
    }

    /// Sets the filter-match field name.
    pub fn matched_prop(mut self, name: impl Into<String>) -> Self {
        self.matched_prop = name.into();
        self
    }

    /// The effective selection field name.
    pub fn selected_field(&self) -> &str {
        non_empty_or(&self.selected_prop, DEFAULT_SELECTED_PROP)
    }

    /// The effective filter-match field name.
    pub fn matched_field(&self) -> &str {
        non_empty_or(&self.matched_prop, DEFAULT_MATCHED_PROP)
    }

    /// Parses options from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let options: Self = toml::from_str(source)?;
        tracing::debug!(
            target: targets::CONFIG,
            selected = options.selected_field(),
            matched = options.matched_field(),
            "loaded list options"
        );
        Ok(options)
    }

    /// Reads options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ListError::io(path, e))?;
        Self::from_toml_str(&source)
    }
}

fn non_empty_or<'a>(name: &'a str, default: &'a str) -> &'a str {
    if name.is_empty() { default } else { name }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let options = ListOptions::default();
        assert_eq!(options.selected_field(), "isSelected");
        assert_eq!(options.matched_field(), "isMatched");
    }

    #[test]
    fn test_empty_names_fall_back() {
        let options = ListOptions::new().selected_prop("").matched_prop("");
        assert_eq!(options.selected_field(), DEFAULT_SELECTED_PROP);
        assert_eq!(options.matched_field(), DEFAULT_MATCHED_PROP);
    }

    #[test]
    fn test_partial_toml_merges_with_defaults() {
        let options = ListOptions::from_toml_str("matched_prop = \"visible\"").unwrap();
        assert_eq!(options.selected_field(), "isSelected");
        assert_eq!(options.matched_field(), "visible");

        let options = ListOptions::from_toml_str("").unwrap();
        assert_eq!(options, ListOptions::default());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = ListOptions::from_toml_str("selected_prop = 3").unwrap_err();
        assert!(matches!(err, ListError::Config(_)));

        let err = ListOptions::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, ListError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "selectedProp = \"chosen\"").unwrap();

        let options = ListOptions::load(file.path()).unwrap();
        assert_eq!(options.selected_field(), "chosen");

        let err = ListOptions::load(file.path().with_extension("missing")).unwrap_err();
        assert!(matches!(err, ListError::Io { .. }));
    }
}
