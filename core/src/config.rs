use serde::{Deserialize, Serialize};

use crate::placement::{PlacementParams, PlacementStrategy};

pub const DEFAULT_CONTAINER_ID: &str = "container";
pub const DEFAULT_MANIFEST_URL: &str = "/assets/json/galleryImages.json";
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;
pub const DEFAULT_MAX_SQUARE_SIZE: f64 = 180.0;
pub const DEFAULT_SQUARE_SPACING: f64 = 100.0;
pub const DEFAULT_ELEMENT_PADDING: f64 = 20.0;
pub const DEFAULT_RESIZE_DELAY_MS: u32 = 300;
pub const DEFAULT_AVOID_SELECTORS: &[&str] = &[
    "#navigation",
    ".navbar",
    "#infoDisplayText",
    "#commissionsDisplayText",
    ".center-text",
];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    Empty(&'static str),
    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be a non-negative number, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("avoid selector at position {0} is blank")]
    BlankSelector(usize),
    #[error("invalid gallery options: {0}")]
    Parse(String),
}

/// Gallery options as accepted from the host page. Missing keys fall back to
/// the defaults, so `{}` is a complete configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryConfig {
    pub container_id: String,
    #[serde(rename = "jsonPath")]
    pub manifest_url: String,
    pub mobile_breakpoint: f64,
    pub max_square_size: f64,
    pub square_spacing: f64,
    pub seed: Option<i64>,
    #[serde(rename = "avoidElements")]
    pub avoid_selectors: Vec<String>,
    pub element_padding: f64,
    #[serde(rename = "resizeDelay")]
    pub resize_delay_ms: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            max_square_size: DEFAULT_MAX_SQUARE_SIZE,
            square_spacing: DEFAULT_SQUARE_SPACING,
            seed: None,
            avoid_selectors: DEFAULT_AVOID_SELECTORS
                .iter()
                .map(|selector| selector.to_string())
                .collect(),
            element_padding: DEFAULT_ELEMENT_PADDING,
            resize_delay_ms: DEFAULT_RESIZE_DELAY_MS,
        }
    }
}

impl GalleryConfig {
    /// Parses a JSON options object and validates the merged result.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(Self::default());
        }
        let config: GalleryConfig =
            serde_json::from_str(trimmed).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.container_id.trim().is_empty() {
            return Err(ConfigError::Empty("containerId"));
        }
        if self.manifest_url.trim().is_empty() {
            return Err(ConfigError::Empty("jsonPath"));
        }
        positive("mobileBreakpoint", self.mobile_breakpoint)?;
        positive("maxSquareSize", self.max_square_size)?;
        non_negative("squareSpacing", self.square_spacing)?;
        non_negative("elementPadding", self.element_padding)?;
        if let Some(index) = self
            .avoid_selectors
            .iter()
            .position(|selector| selector.trim().is_empty())
        {
            return Err(ConfigError::BlankSelector(index));
        }
        Ok(())
    }

    pub fn is_mobile_width(&self, viewport_width: f64) -> bool {
        viewport_width <= self.mobile_breakpoint
    }

    pub fn placement_params(&self) -> PlacementParams {
        PlacementParams::new(self.max_square_size, self.square_spacing)
    }

    pub fn placement_strategy(&self) -> PlacementStrategy {
        PlacementStrategy::for_seed(self.seed)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}
