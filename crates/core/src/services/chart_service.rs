use chrono::{DateTime, Datelike, Months, Utc};

use crate::models::chart::{
    AuditRatioChart, DashboardCharts, LineSegment, Rotation, TextLabel, XpHistoryChart,
};
use crate::models::transaction::{self, Transaction};
use crate::models::user::UserStats;

/// Headroom added to the XP total so the curve never touches the top edge.
pub const GRAPH_HEADROOM: f64 = 100_000.0;

/// Width/height of the normalized chart space.
pub const CHART_EXTENT: f64 = 100.0;

/// Vertical offsets of the two audit bars.
pub const GRANTED_BAR_Y: f64 = 5.0;
pub const RECEIVED_BAR_Y: f64 = 30.0;

const LABEL_FONT_SIZE: f64 = 4.0;
const AXIS_CAPTION: &str = "Xp you received";

/// Used only if the one-month widening overflows chrono's range.
const FALLBACK_MONTH_MS: f64 = 30.0 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Pure geometry for the dashboard charts.
///
/// The core computes every coordinate; the renderer only serializes.
/// All output lives in a 0–100 space whose y axis grows downward.
/// Same input always yields equal output; nothing is cached.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Build both charts for a stats record.
    #[must_use]
    pub fn build_dashboard_charts(&self, stats: &UserStats) -> DashboardCharts {
        DashboardCharts {
            audit: self.build_audit_chart(stats.xp_granted, stats.xp_received),
            history: self.build_xp_history(&stats.transactions),
        }
    }

    // ── Audit ratio ─────────────────────────────────────────────────

    /// Normalized bar lengths `(granted, received)`; the larger side is 1.0.
    ///
    /// With nothing received: `(1, 0)` if anything was granted, else `(0, 0)`.
    #[must_use]
    pub fn compute_audit_traces(granted: f64, received: f64) -> (f64, f64) {
        if granted > received {
            (1.0, received / granted)
        } else if received > 0.0 {
            (granted / received, 1.0)
        } else {
            (0.0, 0.0)
        }
    }

    #[must_use]
    pub fn build_audit_chart(&self, granted: f64, received: f64) -> AuditRatioChart {
        let (granted_trace, received_trace) = Self::compute_audit_traces(granted, received);
        AuditRatioChart {
            granted_trace,
            received_trace,
            granted_bar: LineSegment::horizontal(GRANTED_BAR_Y, granted_trace * CHART_EXTENT),
            received_bar: LineSegment::horizontal(RECEIVED_BAR_Y, received_trace * CHART_EXTENT),
            ratio_label: format_ratio(granted, received),
        }
    }

    // ── XP history ──────────────────────────────────────────────────

    /// Cumulative XP polyline over an ascending transaction list.
    ///
    /// Segment `i` (for `i` in `1..n`) runs from point `i` (`x1`,`y1`) back to
    /// point `i - 1` (`x2`,`y2`), where point `k` plots the running sum of
    /// amounts `0..=k`. Fewer than two transactions draw no segments; an empty
    /// list yields an empty chart. A non-positive vertical scale (net negative
    /// XP outweighing the headroom) also draws no segments but keeps the labels.
    #[must_use]
    pub fn build_xp_history(&self, transactions: &[Transaction]) -> XpHistoryChart {
        let (first, last) = match (transactions.first(), transactions.last()) {
            (Some(f), Some(l)) => (f.created_at, l.created_at),
            _ => return XpHistoryChart::default(),
        };

        let amplitude = amplitude_millis(first, last);
        let max_graph = transaction::total_amount(transactions) + GRAPH_HEADROOM;
        let labels = vec![date_range_label(first, last), axis_caption_label()];
        if max_graph <= 0.0 {
            return XpHistoryChart {
                segments: Vec::new(),
                labels,
            };
        }

        let x_of = |t: &Transaction| {
            (t.created_at - first).num_milliseconds() as f64 * CHART_EXTENT / amplitude
        };
        let y_of = |sum: f64| CHART_EXTENT - (sum * CHART_EXTENT / max_graph);

        let mut segments = Vec::with_capacity(transactions.len().saturating_sub(1));
        let mut cumulative = transactions[0].amount as f64;

        for pair in transactions.windows(2) {
            let (prev, cur) = (&pair[0], &pair[1]);
            let prev_sum = cumulative;
            cumulative += cur.amount as f64;
            segments.push(LineSegment::new(
                x_of(cur),
                y_of(cumulative),
                x_of(prev),
                y_of(prev_sum),
            ));
        }

        XpHistoryChart { segments, labels }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

// ── Horizontal normalization ────────────────────────────────────────

/// Span between first and last transaction, widened by one calendar month,
/// in milliseconds. The span is taken as an instant after the Unix epoch and
/// the month is added to that instant, so a one-day span becomes 32 days.
fn amplitude_millis(first: DateTime<Utc>, last: DateTime<Utc>) -> f64 {
    let span_ms = (last - first).num_milliseconds();
    let widened = DateTime::<Utc>::from_timestamp_millis(span_ms)
        .and_then(|instant| instant.checked_add_months(Months::new(1)))
        .map(|instant| instant.timestamp_millis() as f64)
        .unwrap_or(span_ms as f64 + FALLBACK_MONTH_MS);
    // Out-of-order input could push this to zero or below.
    widened.max(1.0)
}

// ── Labels ──────────────────────────────────────────────────────────

fn date_range_label(first: DateTime<Utc>, last: DateTime<Utc>) -> TextLabel {
    TextLabel {
        x: 15.0,
        y: 99.0,
        font_size: LABEL_FONT_SIZE,
        rotation: None,
        text: format!("Dates: {} to {}", format_date(first), format_date(last)),
    }
}

fn axis_caption_label() -> TextLabel {
    TextLabel {
        x: 1.0,
        y: 55.0,
        font_size: LABEL_FONT_SIZE,
        rotation: Some(Rotation {
            degrees: -90.0,
            cx: 4.0,
            cy: 55.0,
        }),
        text: AXIS_CAPTION.to_string(),
    }
}

// ── Formatting ──────────────────────────────────────────────────────

/// Human-readable XP total: `"XP total: N kb"` below one million, otherwise
/// `"XP total: N.NN Mb"`. Both are rounded half up.
#[must_use]
pub fn format_xp(amount: f64) -> String {
    if amount >= 1_000_000.0 {
        let mb = round_half_up(amount / 1_000_000.0, 2);
        format!("XP total: {mb:.2} Mb")
    } else {
        let kb = round_half_up(amount / 1000.0, 0);
        format!("XP total: {kb} kb")
    }
}

/// Granted / received to one decimal (half up), `"N/A"` when nothing was received.
#[must_use]
pub fn format_ratio(granted: f64, received: f64) -> String {
    if received > 0.0 {
        let ratio = round_half_up(granted / received, 1);
        format!("{ratio:.1}")
    } else {
        "N/A".to_string()
    }
}

/// `{:.N}` rounds exact binary ties to even (1.25 -> "1.2"); labels round them up.
fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale + 0.5).floor() / scale
}

/// `dd/mm/yyyy` in UTC.
#[must_use]
pub fn format_date(date: DateTime<Utc>) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}
