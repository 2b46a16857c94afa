use std::collections::HashMap;

use parse_ints::{scalar::parse_rows, ParseError};

/// Splits the puzzle into its left and right columns.
pub fn parse_input(puzzle: &str) -> Result<(Vec<i32>, Vec<i32>), ParseError> {
    let (left, right) = parse_rows::<i32, 2>(puzzle)?.into_iter().fold(
        (vec![], vec![]),
        |(mut acc_left, mut acc_right), [left, right]| {
            acc_left.push(left);
            acc_right.push(right);
            (acc_left, acc_right)
        },
    );
    Ok((left, right))
}

/// Sum of distances between the columns once both are sorted. Sorts in place.
///
/// Each distance fits in a `u32`, so the `u64` total can't overflow.
pub fn total_distance(left: &mut [i32], right: &mut [i32]) -> u64 {
    left.sort_unstable();
    right.sort_unstable();
    left.iter()
        .zip(right.iter())
        .fold(0, |mut summed_diff, (left_num, right_num)| {
            summed_diff += u64::from(left_num.abs_diff(*right_num));
            summed_diff
        })
}

/// Each left value weighted by how often it shows up in the right column.
///
/// Accumulated in `i128`: the score grows with the square of the row count.
pub fn similarity_score(left: &[i32], right: &[i32]) -> i128 {
    let mut occurrences: HashMap<i32, i128> = HashMap::with_capacity(right.len());
    for &num in right {
        *occurrences.entry(num).or_default() += 1;
    }
    left.iter()
        .map(|num| i128::from(*num) * occurrences.get(num).copied().unwrap_or(0))
        .sum()
}
