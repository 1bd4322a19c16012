//! Flattened row types written by output backends.

use ap_analytics::OverviewSection;
use ap_trace::SeriesKind;

/// One `metric,value` pair of the overview table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRow {
    pub metric: String,
    pub value:  String,
}

impl MetricRow {
    fn new(metric: impl Into<String>, value: impl ToString) -> Self {
        Self { metric: metric.into(), value: value.to_string() }
    }
}

/// Flatten the overview into metric rows, scalars first, then the three
/// columns of each series peak.
pub fn overview_rows(overview: &OverviewSection) -> Vec<MetricRow> {
    let mut rows = vec![
        MetricRow::new("flights",                    overview.flights),
        MetricRow::new("total_generated",            overview.total_generated),
        MetricRow::new("reached_hold",               overview.reached_hold),
        MetricRow::new("missed",                     overview.missed),
        MetricRow::new("hold_history",               overview.hold_history),
        MetricRow::new("percent_in_person",          overview.mix.percent_in_person),
        MetricRow::new("in_person",                  overview.mix.in_person),
        MetricRow::new("online",                     overview.mix.online),
        MetricRow::new("dwell_ticket",               overview.dwell.ticket),
        MetricRow::new("dwell_checkpoint_online",    overview.dwell.checkpoint_online),
        MetricRow::new("dwell_checkpoint_in_person", overview.dwell.checkpoint_in_person),
        MetricRow::new("dwell_arrival_to_hold",      overview.dwell.arrival_to_hold),
    ];
    for peak in &overview.peaks {
        let key = series_key(peak.kind);
        rows.push(MetricRow::new(format!("peak_{key}"), peak.value));
        rows.push(MetricRow::new(format!("peak_{key}_time"), &peak.time_label));
        rows.push(MetricRow::new(format!("peak_{key}_interval"), &peak.interval_label));
    }
    rows
}

fn series_key(kind: SeriesKind) -> &'static str {
    match kind {
        SeriesKind::TicketQueued     => "ticket_queued",
        SeriesKind::CheckpointQueued => "checkpoint_queued",
        SeriesKind::HoldRoomTotal    => "hold_room_total",
        SeriesKind::HeldUp           => "held_up",
    }
}
