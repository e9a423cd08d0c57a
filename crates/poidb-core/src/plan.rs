//! Search plan: the ordered areas and place categories covered by one run.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Categories searched when the plan does not list its own.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["restaurant", "cafe", "meal_takeaway"];

/// A named search center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub name: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Area {
    #[must_use]
    pub fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_owned(),
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPlan {
    pub areas: Vec<Area>,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|&c| c.to_owned()).collect()
}

impl Default for SearchPlan {
    /// Downtown Pittsburgh with the default categories.
    fn default() -> Self {
        Self {
            areas: vec![Area::new("Downtown", 40.4406, -79.9959)],
            categories: default_categories(),
        }
    }
}

impl SearchPlan {
    /// Returns the plan restricted to the area named `name` (case-insensitive),
    /// or `None` if the plan has no such area.
    #[must_use]
    pub fn only_area(&self, name: &str) -> Option<Self> {
        let wanted = name.to_lowercase();
        let area = self
            .areas
            .iter()
            .find(|a| a.name.to_lowercase() == wanted)?;
        Some(Self {
            areas: vec![area.clone()],
            categories: self.categories.clone(),
        })
    }
}

/// Load and validate a search plan from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_plan(path: &Path) -> Result<SearchPlan, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::PlanFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_plan(&content)
}

fn parse_plan(content: &str) -> Result<SearchPlan, ConfigError> {
    let plan: SearchPlan = serde_yaml::from_str(content).map_err(ConfigError::PlanFileParse)?;
    validate_plan(&plan)?;
    Ok(plan)
}

fn validate_plan(plan: &SearchPlan) -> Result<(), ConfigError> {
    if plan.areas.is_empty() {
        return Err(ConfigError::Validation(
            "search plan must list at least one area".to_string(),
        ));
    }

    let mut seen_names = HashSet::new();
    for area in &plan.areas {
        if area.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "area name must be non-empty".to_string(),
            ));
        }

        if !(-90.0..=90.0).contains(&area.latitude) {
            return Err(ConfigError::Validation(format!(
                "area '{}' has latitude {} outside [-90, 90]",
                area.name, area.latitude
            )));
        }

        if !(-180.0..=180.0).contains(&area.longitude) {
            return Err(ConfigError::Validation(format!(
                "area '{}' has longitude {} outside [-180, 180]",
                area.name, area.longitude
            )));
        }

        if !seen_names.insert(area.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate area name: '{}'",
                area.name
            )));
        }
    }

    if plan.categories.is_empty() {
        return Err(ConfigError::Validation(
            "search plan must list at least one category".to_string(),
        ));
    }

    let mut seen_categories = HashSet::new();
    for category in &plan.categories {
        if category.trim().is_empty() {
            return Err(ConfigError::Validation(
                "category must be non-empty".to_string(),
            ));
        }
        if !seen_categories.insert(category.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category: '{category}'"
            )));
        }
    }

    Ok(())
}
