//! Safety rules for a single report.
//!
//! A report is safe when it's strictly increasing or strictly decreasing and
//! every step between neighbours has a magnitude of at most [`MAX_STEP`].

/// Largest allowed distance between two adjacent levels.
pub const MAX_STEP: i64 = 3;

/// Direction of a report, fixed by its first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increasing,
    Decreasing,
    /// The first step is zero, so no direction can be satisfied.
    Flat,
    /// Fewer than two levels, so there is no step at all.
    Trivial,
}

impl Trend {
    pub fn of_step(step: i64) -> Trend {
        match step.signum() {
            1 => Trend::Increasing,
            -1 => Trend::Decreasing,
            _ => Trend::Flat,
        }
    }

    /// The trend required of `report`, taken from its own first pair.
    pub fn of(report: &[i32]) -> Trend {
        steps(report).next().map_or(Trend::Trivial, Trend::of_step)
    }
}

/// Signed differences between adjacent levels, widened so they can't overflow.
pub fn steps(report: &[i32]) -> impl Iterator<Item = i64> + '_ {
    report
        .windows(2)
        .map(|pair| i64::from(pair[1]) - i64::from(pair[0]))
}

pub fn is_safe(report: &[i32]) -> bool {
    let required = match Trend::of(report) {
        Trend::Trivial => return true,
        Trend::Flat => return false,
        trend => trend,
    };
    steps(report).all(|step| Trend::of_step(step) == required && step.abs() <= MAX_STEP)
}

/// Index of the first level whose removal turns an unsafe report into a safe one.
///
/// Returns `None` if the report is already safe or can't be rescued.
pub fn rescue_index(report: &[i32]) -> Option<usize> {
    if is_safe(report) {
        return None;
    }
    first_safe_removal(report)
}

/// Tries every single-level removal in index order, without checking the report itself.
fn first_safe_removal(report: &[i32]) -> Option<usize> {
    let mut candidate = Vec::with_capacity(report.len().saturating_sub(1));
    (0..report.len()).find(|&skip| {
        candidate.clear();
        candidate.extend_from_slice(&report[..skip]);
        candidate.extend_from_slice(&report[skip + 1..]);
        is_safe(&candidate)
    })
}

/// Whether the report is safe, or becomes safe after removing a single level.
pub fn is_tolerably_safe(report: &[i32]) -> bool {
    is_safe(report) || first_safe_removal(report).is_some()
}
