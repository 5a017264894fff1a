//! Scene export.
//!
//! - **SVG export**: pitch, obstacles and planned path for debugging
//!
//! ```rust,ignore
//! use marga::io::{PlanVisualizer, SvgConfig};
//!
//! PlanVisualizer::new(*snapshot.pitch(), SvgConfig::default())
//!     .with_obstacles(&snapshot, mask)
//!     .with_path(path)
//!     .save(std::path::Path::new("plan.svg"))?;
//! ```

mod svg;

pub use svg::{PlanVisualizer, SvgColorScheme, SvgConfig};
