use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{Recommender, DEFAULT_RECOMMENDATION_LIMIT};
use crate::models::{ScoringThresholds, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub recommendation: RecommendationSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// JSON or TOML catalog file; the built-in catalog is used when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self { limit: default_limit() }
    }
}

fn default_limit() -> usize { DEFAULT_RECOMMENDATION_LIMIT }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_budget_weight")]
    pub budget: u32,
    #[serde(default = "default_category_weight")]
    pub category: u32,
    #[serde(default = "default_quality_weight")]
    pub quality: u32,
    #[serde(default = "default_affordable_weight")]
    pub affordable: u32,
    #[serde(default = "default_professional_weight")]
    pub professional_usage: u32,
    #[serde(default = "default_light_weight")]
    pub light_usage: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            budget: default_budget_weight(),
            category: default_category_weight(),
            quality: default_quality_weight(),
            affordable: default_affordable_weight(),
            professional_usage: default_professional_weight(),
            light_usage: default_light_weight(),
        }
    }
}

fn default_budget_weight() -> u32 { 30 }
fn default_category_weight() -> u32 { 40 }
fn default_quality_weight() -> u32 { 20 }
fn default_affordable_weight() -> u32 { 15 }
fn default_professional_weight() -> u32 { 25 }
fn default_light_weight() -> u32 { 15 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(w: &WeightsConfig) -> Self {
        Self {
            budget: w.budget,
            category: w.category,
            quality: w.quality,
            affordable: w.affordable,
            professional_usage: w.professional_usage,
            light_usage: w.light_usage,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "default_low_budget_max")]
    pub low_budget_max: f64,
    #[serde(default = "default_medium_budget_max")]
    pub medium_budget_max: f64,
    #[serde(default = "default_quality_min_rating")]
    pub quality_min_rating: f64,
    #[serde(default = "default_affordable_max_price")]
    pub affordable_max_price: f64,
    #[serde(default = "default_professional_min_price")]
    pub professional_min_price: f64,
    #[serde(default = "default_light_usage_max_price")]
    pub light_usage_max_price: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            low_budget_max: default_low_budget_max(),
            medium_budget_max: default_medium_budget_max(),
            quality_min_rating: default_quality_min_rating(),
            affordable_max_price: default_affordable_max_price(),
            professional_min_price: default_professional_min_price(),
            light_usage_max_price: default_light_usage_max_price(),
        }
    }
}

fn default_low_budget_max() -> f64 { 20000.0 }
fn default_medium_budget_max() -> f64 { 50000.0 }
fn default_quality_min_rating() -> f64 { 4.5 }
fn default_affordable_max_price() -> f64 { 25000.0 }
fn default_professional_min_price() -> f64 { 40000.0 }
fn default_light_usage_max_price() -> f64 { 30000.0 }

impl ThresholdsConfig {
    /// Budget band limits must satisfy low <= medium
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.low_budget_max > self.medium_budget_max {
            return Err(ConfigError::Message(format!(
                "scoring.thresholds.low_budget_max ({}) must not exceed medium_budget_max ({})",
                self.low_budget_max, self.medium_budget_max
            )));
        }
        Ok(())
    }
}

impl From<&ThresholdsConfig> for ScoringThresholds {
    fn from(t: &ThresholdsConfig) -> Self {
        Self {
            low_budget_max: t.low_budget_max,
            medium_budget_max: t.medium_budget_max,
            quality_min_rating: t.quality_min_rating,
            affordable_max_price: t.affordable_max_price,
            professional_min_price: t.professional_min_price,
            light_usage_max_price: t.light_usage_max_price,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with KITCHEN_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., KITCHEN__RECOMMENDATION__LIMIT -> recommendation.limit
            .add_source(environment())
            .build()?;

        Self::finish(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        Self::finish(settings)
    }

    fn finish(settings: Config) -> Result<Self, ConfigError> {
        let settings: Self = apply_env_overrides(settings)?.try_deserialize()?;
        settings.scoring.thresholds.validate()?;
        Ok(settings)
    }

    /// Build the recommender described by the scoring section
    pub fn recommender(&self) -> Recommender {
        Recommender::new(
            ScoringWeights::from(&self.scoring.weights),
            ScoringThresholds::from(&self.scoring.thresholds),
            self.recommendation.limit,
        )
    }
}

fn environment() -> Environment {
    Environment::with_prefix("KITCHEN")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply well-known unprefixed environment variables
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Ok(path) = std::env::var("CATALOG_PATH") {
        builder = builder.set_override("catalog.path", path)?;
    }

    builder.build()
}
