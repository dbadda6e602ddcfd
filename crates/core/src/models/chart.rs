use serde::{Deserialize, Serialize};

/// A straight line in the normalized 0–100 chart space.
///
/// The vertical axis grows downward, as in SVG.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// A horizontal bar starting at x = 0.
    pub fn horizontal(y: f64, length: f64) -> Self {
        Self::new(0.0, y, length, y)
    }
}

/// Rotation of a text label around a pivot point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub degrees: f64,
    pub cx: f64,
    pub cy: f64,
}

/// A text primitive placed in chart space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub rotation: Option<Rotation>,
    pub text: String,
}

/// Two-segment audit ratio bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRatioChart {
    /// Normalized length (0..=1) of the granted bar
    pub granted_trace: f64,

    /// Normalized length (0..=1) of the received bar
    pub received_trace: f64,

    pub granted_bar: LineSegment,
    pub received_bar: LineSegment,

    /// Granted / received to one decimal, or "N/A" when nothing was received
    pub ratio_label: String,
}

/// Cumulative XP-over-time polyline with its captions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XpHistoryChart {
    pub segments: Vec<LineSegment>,
    pub labels: Vec<TextLabel>,
}

impl XpHistoryChart {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.labels.is_empty()
    }
}

/// Everything the dashboard draws, derived from one `UserStats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub audit: AuditRatioChart,
    pub history: XpHistoryChart,
}
