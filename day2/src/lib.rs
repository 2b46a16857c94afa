use parse_ints::{scalar::parse_lines, ParseError};

pub mod safety;

pub use safety::{is_safe, is_tolerably_safe, rescue_index, Trend};

/// Parses one report per line.
pub fn parse_input(puzzle: &str) -> Result<Vec<Vec<i32>>, ParseError> {
    parse_lines(puzzle)
}

/// Number of reports that are safe as given.
pub fn count_safe(reports: &[Vec<i32>]) -> usize {
    reports.iter().filter(|report| is_safe(report)).count()
}

/// Number of reports that are safe once at most one level is removed.
pub fn count_tolerably_safe(reports: &[Vec<i32>]) -> usize {
    reports
        .iter()
        .filter(|report| is_tolerably_safe(report))
        .count()
}

/// Logs which level rescues each unsafe report, returning how many were logged.
///
/// Skips the removal search entirely unless `trace` events are enabled.
pub fn trace_rescues(reports: &[Vec<i32>]) -> usize {
    if !tracing::enabled!(tracing::Level::TRACE) {
        return 0;
    }
    let mut rescued = 0;
    for (idx, report) in reports.iter().enumerate() {
        if let Some(level) = rescue_index(report) {
            tracing::trace!(line = idx + 1, level, "report rescued by removing a level");
            rescued += 1;
        }
    }
    rescued
}

#[cfg(test)]
mod test {
    use super::*;

    const EXAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn solves_example() {
        let reports = parse_input(EXAMPLE).unwrap();
        assert_eq!(reports.len(), 6);
        assert_eq!(count_safe(&reports), 2);
        assert_eq!(count_tolerably_safe(&reports), 4);
    }

    #[test]
    fn counts_scenario_reports() {
        let reports = vec![
            vec![7, 6, 4, 2, 1],
            vec![1, 2, 7, 8, 9],
            vec![9, 7, 6, 2, 1],
            vec![1, 3, 2, 4, 5],
            vec![8, 6, 4, 4, 1],
            vec![1, 2, 3, 4, 5],
        ];
        assert_eq!(count_safe(&reports), 2);
        assert_eq!(count_tolerably_safe(&reports), 4);
    }

    #[test]
    fn accepts_comma_separated_reports() {
        let reports = parse_input("7,6,4,2,1\n1, 3, 2, 4, 5\n").unwrap();
        assert_eq!(count_safe(&reports), 1);
        assert_eq!(count_tolerably_safe(&reports), 2);
    }

    #[test]
    fn rescues_are_only_searched_when_tracing() {
        let reports = parse_input(EXAMPLE).unwrap();
        let quiet = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::sink)
            .finish();
        let logged = tracing::subscriber::with_default(quiet, || trace_rescues(&reports));
        assert_eq!(logged, 0);

        let verbose = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::sink)
            .finish();
        let logged = tracing::subscriber::with_default(verbose, || trace_rescues(&reports));
        assert_eq!(logged, 2);
    }

    #[test]
    fn no_reports_counts_zero() {
        assert_eq!(count_safe(&[]), 0);
        assert_eq!(count_tolerably_safe(&[]), 0);
    }

    #[test]
    fn blank_report_is_rejected() {
        assert!(matches!(
            parse_input("1 2 3\n\n4 5 6\n"),
            Err(ParseError::EmptyLine { line: 2 })
        ));
    }
}
