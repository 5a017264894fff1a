//! Configuration loading for Marga.
//!
//! Loads all configuration from a single TOML file with sensible defaults.
//!
//! ```rust,ignore
//! use marga::config::MargaConfig;
//!
//! // Load from default path (configs/marga.toml)
//! let config = MargaConfig::load_default()?;
//! let planner = config.tangent_planner();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | `[planner]` | Clearance margin, recursion depth |
//! | `[pitch]` | Pitch size |
//! | `[obstacles]` | Ball and robot collision radii |
//! | `[fallback]` | Ray-fan fallback planner |
//!
//! ## Example TOML
//!
//! ```toml
//! [planner]
//! clearance_margin = 10.0   # cm beyond each obstacle radius
//! max_depth = 10
//!
//! [pitch]
//! width = 244.0
//! height = 113.7
//!
//! [obstacles]
//! ball_radius = 20.0
//! robot_radius = 28.0
//!
//! [fallback]
//! section_count = 222
//! max_attempts = 5
//! shrink_step = 20.0
//! ```

pub(crate) mod defaults;
mod marga;
mod sections;

pub use marga::{DEFAULT_CONFIG_PATH, MargaConfig};
pub use sections::{ObstacleSection, PitchSection};
