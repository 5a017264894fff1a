//! Main MargaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::planning::{HeuristicConfig, HeuristicPlanner, PlannerConfig, TangentPlanner};
use crate::world::{ObstacleRadii, Pitch};

use super::sections::{ObstacleSection, PitchSection};

/// Default config file location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/marga.toml";

/// Full Marga configuration loaded from TOML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// Tangent planner settings
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Pitch geometry
    #[serde(default)]
    pub pitch: PitchSection,

    /// Obstacle collision radii
    #[serde(default)]
    pub obstacles: ObstacleSection,

    /// Ray-fan fallback settings
    #[serde(default)]
    pub fallback: HeuristicConfig,
}

impl MargaConfig {
    /// Load and validate configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from default config path (configs/marga.toml), falling back to
    /// built-in defaults when the file does not exist
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("{} not found, using defaults", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Parse and validate from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.planner.clearance_margin.is_finite() && self.planner.clearance_margin >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "planner.clearance_margin must be non-negative, got {}",
                self.planner.clearance_margin
            )));
        }
        if !(self.planner.detour_padding.is_finite() && self.planner.detour_padding >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "planner.detour_padding must be non-negative, got {}",
                self.planner.detour_padding
            )));
        }
        if self.planner.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "planner.max_depth must be at least 1".to_string(),
            ));
        }
        if !(self.pitch.width > 0.0 && self.pitch.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "pitch must have positive size, got {} x {}",
                self.pitch.width, self.pitch.height
            )));
        }
        self.radii()
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("obstacles: {e}")))?;
        if self.fallback.section_count == 0 {
            return Err(ConfigError::Invalid(
                "fallback.section_count must be at least 1".to_string(),
            ));
        }
        if !(self.fallback.shrink_step.is_finite() && self.fallback.shrink_step > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "fallback.shrink_step must be positive, got {}",
                self.fallback.shrink_step
            )));
        }
        Ok(())
    }

    /// Pitch geometry
    pub fn pitch(&self) -> Pitch {
        self.pitch.to_pitch()
    }

    /// Obstacle collision radii
    pub fn radii(&self) -> ObstacleRadii {
        self.obstacles.to_radii()
    }

    /// Build the tangent planner
    pub fn tangent_planner(&self) -> TangentPlanner {
        TangentPlanner::new(self.planner.clone())
    }

    /// Build the fallback planner
    pub fn heuristic_planner(&self) -> HeuristicPlanner {
        HeuristicPlanner::new(self.fallback.clone())
    }
}
