use crate::models::chart::{AuditRatioChart, DashboardCharts, LineSegment, TextLabel, XpHistoryChart};
use crate::models::user::UserStats;
use crate::services::chart_service::format_xp;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const AUDIT_STROKE_WIDTH: u32 = 20;
const GRANTED_STROKE: &str = "white";
const RECEIVED_STROKE: &str = "red";
const HISTORY_STROKE: &str = "gold";
const FOOTER_TEXT: &str = "Copyright Projeckt Aqua 2025. All rights reserved.";

/// Serializes chart geometry into SVG markup and the full dashboard into a
/// standalone HTML document. No geometry is computed here.
pub struct RenderService;

impl RenderService {
    pub fn new() -> Self {
        Self
    }

    /// Audit bar: two thick horizontal `<line>`s.
    #[must_use]
    pub fn audit_svg(&self, chart: &AuditRatioChart) -> String {
        let mut svg = format!("<svg xmlns=\"{SVG_NS}\">");
        push_line(&mut svg, &chart.granted_bar, GRANTED_STROKE, Some(AUDIT_STROKE_WIDTH));
        push_line(&mut svg, &chart.received_bar, RECEIVED_STROKE, Some(AUDIT_STROKE_WIDTH));
        svg.push_str("</svg>");
        svg
    }

    /// XP history: white background, one gold `<line>` per segment, then the labels.
    #[must_use]
    pub fn history_svg(&self, chart: &XpHistoryChart) -> String {
        let mut svg = format!(
            "<svg xmlns=\"{SVG_NS}\" width=\"80\" height=\"50\" viewBox=\"0 0 100 100\">\
             <rect width=\"100\" height=\"100\" fill=\"white\"/>"
        );
        for segment in &chart.segments {
            push_line(&mut svg, segment, HISTORY_STROKE, None);
        }
        for label in &chart.labels {
            push_text(&mut svg, label);
        }
        svg.push_str("</svg>");
        svg
    }

    /// Full dashboard page for one stats record.
    #[must_use]
    pub fn dashboard_html(&self, stats: &UserStats, charts: &DashboardCharts) -> String {
        let mut html = String::with_capacity(4096);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str("<title>XP Dashboard</title>\n</head>\n<body>\n<div id=\"container\">\n");
        html.push_str(&format!(
            "<div class=\"welcome-message\">Welcome Back, {}!</div>\n",
            escape_html(&stats.first_name)
        ));

        html.push_str("<div class=\"div-user\">\n<div class=\"div-info\">\n");
        html.push_str(&format!(
            "<div class=\"div-name\"><h3>{}</h3></div>\n",
            escape_html(&stats.full_name())
        ));
        html.push_str(&format!(
            "<div class=\"div-xp\"><div>Level: {}</div><div>{}</div></div>\n",
            stats.level,
            format_xp(stats.total_xp)
        ));

        html.push_str("<div class=\"div-audit\">\n<h4>Audit Info</h4>\n");
        html.push_str(&format!(
            "<div class=\"xp-done\">\u{2b06} Gived {}</div>\n",
            format_xp(stats.xp_granted)
        ));
        html.push_str(&self.audit_svg(&charts.audit));
        html.push('\n');
        html.push_str(&format!(
            "<div class=\"xp-received\">\u{2b07} Received {}</div>\n",
            format_xp(stats.xp_received)
        ));
        html.push_str(&format!(
            "<div>Audit Ratio: {}</div>\n",
            escape_html(&charts.audit.ratio_label)
        ));
        html.push_str("</div>\n</div>\n</div>\n");

        html.push_str("<div class=\"div-graph\">\n<h1>XP Graph</h1>\n");
        html.push_str(&self.history_svg(&charts.history));
        html.push_str("\n</div>\n");

        html.push_str(&format!("<div class=\"footer\">{FOOTER_TEXT}</div>\n"));
        html.push_str("</div>\n</body>\n</html>\n");
        html
    }
}

impl Default for RenderService {
    fn default() -> Self {
        Self::new()
    }
}

// ── Primitives ──────────────────────────────────────────────────────

fn push_line(out: &mut String, segment: &LineSegment, stroke: &str, width: Option<u32>) {
    out.push_str(&format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{stroke}\"",
        segment.x1, segment.y1, segment.x2, segment.y2
    ));
    if let Some(width) = width {
        out.push_str(&format!(" stroke-width=\"{width}\""));
    }
    out.push_str("/>");
}

fn push_text(out: &mut String, label: &TextLabel) {
    out.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" fill=\"black\" font-size=\"{}\"",
        label.x, label.y, label.font_size
    ));
    if let Some(rotation) = &label.rotation {
        out.push_str(&format!(
            " transform=\"rotate({} {},{})\"",
            rotation.degrees, rotation.cx, rotation.cy
        ));
    }
    out.push_str(&format!(">{}</text>", escape_html(&label.text)));
}

/// Escape text for HTML/SVG content and attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
