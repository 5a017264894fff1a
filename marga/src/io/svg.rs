//! SVG rendering of a planning scene.
//!
//! Draws the pitch, obstacle circles with their clearance rings, the start
//! pose, the destination and the planned polyline. Intended for debugging
//! and for the demo; the planner never calls it.

use std::fmt;
use std::path::Path as FsPath;

use crate::core::{Circle, Pose2D, Vector2D};
use crate::planning::Path;
use crate::world::{ObstacleFlags, ObstacleView, Pitch};

/// SVG color scheme
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Pitch surface
    pub pitch: &'static str,
    /// Obstacle fill
    pub obstacle: &'static str,
    /// Clearance ring stroke
    pub clearance: &'static str,
    /// Planned path stroke
    pub path: &'static str,
    /// Start marker
    pub start: &'static str,
    /// Destination marker
    pub destination: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            pitch: "#2E7D32",
            obstacle: "#333333",
            clearance: "#FFCC00",
            path: "#2222AA",
            start: "#FFFFFF",
            destination: "#AA2222",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per centimetre
    pub scale: f32,
    /// Padding around the pitch in pixels
    pub padding: f32,
    /// Path line width in pixels
    pub path_width: f32,
    /// Waypoint and start marker radius in pixels
    pub marker_radius: f32,
    /// Color scheme
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 4.0,
            padding: 20.0,
            path_width: 2.0,
            marker_radius: 4.0,
            colors: SvgColorScheme::default(),
        }
    }
}

/// SVG builder for one planning scene
pub struct PlanVisualizer {
    config: SvgConfig,
    pitch: Pitch,
    obstacles: Vec<Circle>,
    clearance_margin: f32,
    start: Option<Pose2D>,
    destination: Option<Vector2D>,
    path: Option<Path>,
    title: Option<String>,
}

impl PlanVisualizer {
    /// Create a visualizer for an empty pitch
    pub fn new(pitch: Pitch, config: SvgConfig) -> Self {
        Self {
            config,
            pitch,
            obstacles: Vec::new(),
            clearance_margin: 0.0,
            start: None,
            destination: None,
            path: None,
            title: None,
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add the obstacles `view` selects with `mask`
    pub fn with_obstacles<V: ObstacleView + ?Sized>(
        mut self,
        view: &V,
        mask: ObstacleFlags,
    ) -> Self {
        self.obstacles.extend(view.obstacle_circles(mask));
        self
    }

    /// Draw a ring this far outside every obstacle
    pub fn with_clearance(mut self, margin: f32) -> Self {
        self.clearance_margin = margin;
        self
    }

    /// Mark the start pose
    pub fn with_start(mut self, pose: Pose2D) -> Self {
        self.start = Some(pose);
        self
    }

    /// Mark the destination
    pub fn with_destination(mut self, point: Vector2D) -> Self {
        self.destination = Some(point);
        self
    }

    /// Draw a planned path
    pub fn with_path(mut self, path: Path) -> Self {
        self.path = Some(path);
        self
    }

    /// Render to SVG string
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Render and write to `path`
    pub fn save(&self, path: &FsPath) -> std::io::Result<()> {
        std::fs::write(path, self.render())
    }

    fn title_height(&self) -> f32 {
        if self.title.is_some() { 30.0 } else { 0.0 }
    }

    /// Pitch coordinates to pixels (SVG Y axis points down)
    fn to_px(&self, point: Vector2D) -> (f32, f32) {
        (
            self.config.padding + point.x * self.config.scale,
            self.config.padding
                + self.title_height()
                + (self.pitch.height - point.y) * self.config.scale,
        )
    }

    fn write_obstacles(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"  <g id="obstacles">"#)?;
        for circle in &self.obstacles {
            let (cx, cy) = self.to_px(circle.center());
            writeln!(
                f,
                r#"    <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" opacity="0.8"/>"#,
                cx,
                cy,
                circle.radius() * self.config.scale,
                self.config.colors.obstacle
            )?;
            if self.clearance_margin > 0.0 {
                writeln!(
                    f,
                    r#"    <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="{}" stroke-dasharray="4 3"/>"#,
                    cx,
                    cy,
                    (circle.radius() + self.clearance_margin) * self.config.scale,
                    self.config.colors.clearance
                )?;
            }
        }
        writeln!(f, "  </g>")
    }

    fn write_path(&self, f: &mut fmt::Formatter<'_>, path: &Path) -> fmt::Result {
        let points = path.global_points();
        let d = points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let (x, y) = self.to_px(*point);
                format!("{} {:.1} {:.1}", if i == 0 { "M" } else { "L" }, x, y)
            })
            .collect::<Vec<_>>()
            .join(" ");

        writeln!(f, r#"  <g id="path">"#)?;
        writeln!(
            f,
            r#"    <path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round"/>"#,
            d, self.config.colors.path, self.config.path_width
        )?;
        for waypoint in path {
            let (x, y) = self.to_px(waypoint.target());
            writeln!(
                f,
                r#"    <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
                x, y, self.config.marker_radius * 0.75, self.config.colors.path
            )?;
        }
        writeln!(f, "  </g>")
    }

    fn write_markers(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(pose) = self.start {
            let (x, y) = self.to_px(pose.position);
            let arrow = self.config.marker_radius * 3.0;
            writeln!(
                f,
                r#"  <circle id="start" cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="black"/>"#,
                x, y, self.config.marker_radius, self.config.colors.start
            )?;
            writeln!(
                f,
                r#"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="2"/>"#,
                x,
                y,
                x + arrow * pose.heading.cos(),
                y - arrow * pose.heading.sin(),
                self.config.colors.start
            )?;
        }
        if let Some(point) = self.destination {
            let (x, y) = self.to_px(point);
            let r = self.config.marker_radius;
            writeln!(
                f,
                r#"  <path id="destination" d="M {:.1} {:.1} L {:.1} {:.1} M {:.1} {:.1} L {:.1} {:.1}" stroke="{}" stroke-width="2"/>"#,
                x - r,
                y - r,
                x + r,
                y + r,
                x - r,
                y + r,
                x + r,
                y - r,
                self.config.colors.destination
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanVisualizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let padding = self.config.padding;
        let title_height = self.title_height();
        let pitch_w = self.pitch.width * self.config.scale;
        let pitch_h = self.pitch.height * self.config.scale;
        let width = pitch_w + 2.0 * padding;
        let height = pitch_h + 2.0 * padding + title_height;

        writeln!(f, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )?;
        writeln!(f, r##"  <rect width="100%" height="100%" fill="#F8F8F8"/>"##)?;

        if let Some(title) = &self.title {
            writeln!(
                f,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0,
                title
            )?;
        }

        writeln!(
            f,
            r#"  <rect id="pitch" x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            padding,
            padding + title_height,
            pitch_w,
            pitch_h,
            self.config.colors.pitch
        )?;

        self.write_obstacles(f)?;
        if let Some(path) = &self.path {
            self.write_path(f, path)?;
        }
        self.write_markers(f)?;

        writeln!(f, "</svg>")
    }
}
