//! Peak and per-line maximum finders.
//!
//! Every peak in a report goes through [`scan`], so all series and all
//! resource kinds share one tie-break: intervals are visited in ascending
//! order and only a strictly greater value replaces the current peak.  The
//! earliest interval reaching the maximum therefore wins.

use ap_core::LineKind;
use ap_trace::{Line, Series, Trace};
use log::debug;

/// The highest count seen and the interval where it first occurred.
///
/// `interval` is `None` when nothing exceeded zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Peak {
    pub value:    u32,
    pub interval: Option<usize>,
}

impl Peak {
    pub const NONE: Peak = Peak { value: 0, interval: None };
}

/// Peak of a sparse series.  An empty series yields [`Peak::NONE`].
pub fn series_peak(series: &Series) -> Peak {
    scan(series.iter())
}

/// Largest occupancy of line `index` over `history`.
///
/// `history` yields each interval's lines in ascending interval order.
/// Intervals whose snapshot is too short to hold line `index` are skipped.
pub fn line_max<'a, I>(history: I, index: usize) -> Peak
where
    I: IntoIterator<Item = &'a [Line]>,
{
    scan(history.into_iter().enumerate().filter_map(|(interval, lines)| {
        match lines.get(index) {
            Some(line) => Some((interval, line.len() as u32)),
            None => {
                debug!("interval {interval}: no line {index} ({} lines recorded)", lines.len());
                None
            }
        }
    }))
}

/// One [`Peak`] per configured resource of `kind`, in config-list order.
pub fn line_maxima(trace: &Trace, kind: LineKind) -> Vec<Peak> {
    (0..trace.resource_count(kind))
        .map(|index| line_max(trace.history(kind), index))
        .collect()
}

/// Sum of independent per-line maxima.
///
/// Lines may peak in different intervals, so this can exceed any occupancy
/// the resource kind actually reached at one instant.
pub fn sum_of_line_maxima(peaks: &[Peak]) -> u32 {
    peaks.iter().map(|p| p.value).sum()
}

fn scan(points: impl Iterator<Item = (usize, u32)>) -> Peak {
    let mut peak = Peak::NONE;
    for (interval, value) in points {
        if value > peak.value {
            peak = Peak { value, interval: Some(interval) };
        }
    }
    peak
}
