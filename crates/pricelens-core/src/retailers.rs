use std::collections::HashSet;
use std::path::Path;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Placeholder that [`RetailerConfig::search_url`] substitutes with the
/// encoded query.
const QUERY_PLACEHOLDER: &str = "{query}";

/// CSS selector expressions for one retailer's search-results markup.
///
/// The expressions are opaque to this crate; they are handed to the
/// DOM-query layer as-is. All three must be non-empty (validated at load).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selectors {
    /// Matches one product card in the results grid.
    pub item_container: String,
    /// Matches the product name node inside a card.
    pub name: String,
    /// Matches the price node inside a card.
    pub price: String,
}

/// Declarative description of one retailer. Adding a retailer is a config
/// change, not a code change: the extraction pipeline treats every retailer
/// identically through this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetailerConfig {
    pub name: String,
    /// Search URL template containing a `{query}` placeholder,
    /// e.g. `https://www.amazon.com/s?k={query}`.
    pub url_template: String,
    pub selectors: Selectors,
}

impl RetailerConfig {
    /// Builds the fully-qualified search URL for `query`.
    ///
    /// Whitespace runs become `+` and all other non-alphanumeric characters
    /// are percent-encoded, matching what the retailers' own search boxes
    /// produce.
    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        let encoded = query
            .split_whitespace()
            .map(|token| utf8_percent_encode(token, NON_ALPHANUMERIC).to_string())
            .collect::<Vec<_>>()
            .join("+");
        self.url_template.replace(QUERY_PLACEHOLDER, &encoded)
    }
}

#[derive(Debug, Deserialize)]
pub struct RetailersFile {
    pub retailers: Vec<RetailerConfig>,
}

/// Load and validate the retailer table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation (empty/duplicate names, empty selectors, missing `{query}`
/// placeholder).
pub fn load_retailers(path: &Path) -> Result<RetailersFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RetailersFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let retailers_file: RetailersFile = serde_yaml::from_str(&content)?;

    validate_retailers(&retailers_file)?;

    Ok(retailers_file)
}

fn validate_retailers(retailers_file: &RetailersFile) -> Result<(), ConfigError> {
    if retailers_file.retailers.is_empty() {
        return Err(ConfigError::Validation(
            "retailers file defines no retailers".to_string(),
        ));
    }

    let mut seen_names = HashSet::new();

    for retailer in &retailers_file.retailers {
        if retailer.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "retailer name must be non-empty".to_string(),
            ));
        }

        if !seen_names.insert(retailer.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate retailer name: '{}'",
                retailer.name
            )));
        }

        if !retailer.url_template.contains(QUERY_PLACEHOLDER) {
            return Err(ConfigError::Validation(format!(
                "retailer '{}' url_template is missing the {QUERY_PLACEHOLDER} placeholder",
                retailer.name
            )));
        }

        let selectors = [
            ("item_container", &retailer.selectors.item_container),
            ("name", &retailer.selectors.name),
            ("price", &retailer.selectors.price),
        ];
        for (field, value) in selectors {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "retailer '{}' has an empty {field} selector",
                    retailer.name
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "retailers_test.rs"]
mod tests;
