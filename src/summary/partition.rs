use std::cmp::Ordering;

use super::models::PlayerSummary;

/// Which output of [`partition`] a value goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> From<Result<L, R>> for Side<L, R> {
    fn from(result: Result<L, R>) -> Self {
        match result {
            Ok(left) => Side::Left(left),
            Err(right) => Side::Right(right),
        }
    }
}

/// Splits `items` into two vectors in a single pass.
///
/// `classify` decides the side of each item and may convert it on the way.
/// Relative input order is kept within each output.
///
/// # Example
/// ```
/// use bb_summarizer::summary::partition::{Side, partition};
///
/// let (even, odd) = partition([2, 3, 4], |n| if n % 2 == 0 { Side::Left(n) } else { Side::Right(n) });
/// assert_eq!(even, vec![2, 4]);
/// assert_eq!(odd, vec![3]);
/// ```
pub fn partition<T, L, R, I, F>(items: I, mut classify: F) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Side<L, R>,
{
    let mut left = Vec::new();
    let mut right = Vec::new();

    for item in items {
        match classify(item) {
            Side::Left(value) => left.push(value),
            Side::Right(value) => right.push(value),
        }
    }

    (left, right)
}

/// Ranking order for player summaries: ranked players first, higher rating first.
///
/// Two unranked players, or two with the same rating, compare equal, so a
/// stable sort keeps their input order.
pub fn compare_by_skill_rating(a: &PlayerSummary, b: &PlayerSummary) -> Ordering {
    match (a.competitive_rank, b.competitive_rank) {
        (None, None) => Ordering::Equal,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(rank_a), Some(rank_b)) => rank_b.cmp(&rank_a),
    }
}
