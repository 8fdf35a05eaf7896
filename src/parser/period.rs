//! Period field parsing and run collapsing
//!
//! A period field lists single periods and ranges separated by commas, for
//! example `3-4,6,8~10`. Every component is expanded, the union is sorted
//! and deduplicated, then folded into maximal runs of consecutive periods.

use std::collections::BTreeSet;

use super::LineRejection;

/// Characters accepted between the two ends of a range.
pub const RANGE_SEPARATORS: &[char] = &['-', '~', '–', '—'];

/// Parse a period field into sorted, disjoint, non-adjacent `(start, end)` runs.
///
/// Whitespace anywhere in the field is ignored and the full-width comma `，`
/// counts as `,`. Any malformed component rejects the whole field.
pub fn parse_period_field(field: &str, max_period: u8) -> Result<Vec<(u8, u8)>, LineRejection> {
    let normalized: String = field
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '，' { ',' } else { c })
        .collect();

    if normalized.is_empty() {
        return Err(LineRejection::BadPeriod(field.to_string()));
    }

    let mut periods = BTreeSet::new();
    for component in normalized.split(',') {
        let (start, end) = parse_component(component, max_period)
            .ok_or_else(|| LineRejection::BadPeriod(field.to_string()))?;
        periods.extend(start..=end);
    }

    Ok(collapse_runs(periods))
}

/// Parse `n` or `a<sep>b`, returning ordered bounds.
fn parse_component(component: &str, max_period: u8) -> Option<(u8, u8)> {
    let (a, b) = match component.split_once(RANGE_SEPARATORS) {
        Some((a, b)) => (parse_period(a, max_period)?, parse_period(b, max_period)?),
        None => {
            let p = parse_period(component, max_period)?;
            (p, p)
        }
    };
    Some((a.min(b), a.max(b)))
}

fn parse_period(token: &str, max_period: u8) -> Option<u8> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let period = token.parse::<u8>().ok()?;
    (1..=max_period).contains(&period).then_some(period)
}

/// Fold an ordered set of periods into maximal consecutive runs.
pub fn collapse_runs(periods: impl IntoIterator<Item = u8>) -> Vec<(u8, u8)> {
    let mut runs: Vec<(u8, u8)> = Vec::new();
    for period in periods {
        match runs.last_mut() {
            Some((_, end)) if end.checked_add(1) == Some(period) => *end = period,
            Some((_, end)) if *end >= period => {}
            _ => runs.push((period, period)),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    const MAX: u8 = 14;

    #[test]
    fn single_period() {
        assert_eq!(parse_period_field("6", MAX).unwrap(), vec![(6, 6)]);
    }

    #[test]
    fn comma_list_collapses_into_one_run() {
        assert_eq!(parse_period_field("6,7,8", MAX).unwrap(), vec![(6, 8)]);
        assert_eq!(parse_period_field("6，7", MAX).unwrap(), vec![(6, 7)]);
    }

    #[test]
    fn every_range_separator_is_accepted() {
        for sep in ["-", "~", "–", "—"] {
            let field = format!("3{sep}5");
            assert_eq!(parse_period_field(&field, MAX).unwrap(), vec![(3, 5)], "sep {sep}");
        }
    }

    #[test]
    fn reversed_range_is_normalized() {
        assert_eq!(parse_period_field("8~6", MAX).unwrap(), vec![(6, 8)]);
    }

    #[test]
    fn mixed_components_split_into_runs() {
        assert_eq!(parse_period_field("3-4,6,8-10", MAX).unwrap(), vec![(3, 4), (6, 6), (8, 10)]);
        assert_eq!(parse_period_field("3,5", MAX).unwrap(), vec![(3, 3), (5, 5)]);
    }

    #[test]
    fn overlapping_and_unsorted_components_merge() {
        assert_eq!(parse_period_field("9,2-4,3,5", MAX).unwrap(), vec![(2, 5), (9, 9)]);
    }

    #[test]
    fn internal_whitespace_is_ignored() {
        assert_eq!(parse_period_field(" 6 - 8 ", MAX).unwrap(), vec![(6, 8)]);
    }

    #[test]
    fn malformed_fields_are_rejected() {
        for field in ["x", "", "6,", ",6", "6,,7", "1-2-3", "6-", "-6", "+3", "3.5", "6a", "٣"] {
            assert!(parse_period_field(field, MAX).is_err(), "field {field:?} should be rejected");
        }
    }

    #[test]
    fn out_of_range_periods_are_rejected() {
        assert!(parse_period_field("0", MAX).is_err());
        assert!(parse_period_field("15", MAX).is_err());
        assert!(parse_period_field("12-15", MAX).is_err());
        assert!(parse_period_field("300", MAX).is_err());
        assert!(parse_period_field("99999999999999999999", MAX).is_err());
        assert_eq!(parse_period_field("15", 16).unwrap(), vec![(15, 15)]);
    }

    #[test]
    fn collapse_runs_handles_edges() {
        assert_eq!(collapse_runs(Vec::<u8>::new()), Vec::<(u8, u8)>::new());
        assert_eq!(collapse_runs([1, 2, 3, 5, 7, 8]), vec![(1, 3), (5, 5), (7, 8)]);
        assert_eq!(collapse_runs([254, 255]), vec![(254, 255)]);
    }

    proptest! {
        #[test]
        fn prop_runs_partition_the_period_set(
            set in prop::collection::btree_set(1u8..=MAX, 1..8)
        ) {
            let field = set.iter().map(u8::to_string).collect::<Vec<_>>().join(",");
            let runs = parse_period_field(&field, MAX).unwrap();

            // Expanding the runs gives back exactly the input set, in order
            let expanded: Vec<u8> = runs.iter().flat_map(|&(s, e)| s..=e).collect();
            let expected: Vec<u8> = set.iter().copied().collect();
            prop_assert_eq!(expanded, expected);

            // Runs are maximal: consecutive runs are separated by a gap
            for pair in runs.windows(2) {
                prop_assert!(pair[0].1 + 1 < pair[1].0);
            }
            for &(s, e) in &runs {
                prop_assert!(s <= e);
            }
        }

        #[test]
        fn prop_reversed_ranges_swap(a in 1u8..=MAX, b in 1u8..=MAX, sep in prop::sample::select(vec!["-", "~"])) {
            let runs = parse_period_field(&format!("{a}{sep}{b}"), MAX).unwrap();
            prop_assert_eq!(runs, vec![(a.min(b), a.max(b))]);
        }
    }
}
