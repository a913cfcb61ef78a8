//! Majority element search with operation accounting.
use crate::counters::Counters;
use crate::error::{Error, Result};

/// Boyer-Moore majority vote over a slice, recording the work done in `counters`.
///
/// The **majority element** is the value that appears
/// more than ⌊n/2⌋ times, where `n` is the length of the slice.
///
/// The first pass cancels out pairs of different elements to pick a candidate,
/// the second pass counts the candidate's occurrences to confirm it.
/// Runs in O(n) time and O(1) additional space.
///
/// Every element of the first pass adds one comparison to `counters`, every
/// element of the second pass adds one array access. Swaps are never counted.
/// So a call on `n` elements adds exactly `n` comparisons and `n` array accesses.
/// The counters are not reset by this function.
///
/// # Returns
/// - `Ok(Some(x))` if `x` is the majority element.
/// - `Ok(None)` if no majority element is present.
///
/// # Errors
/// [`Error::EmptyInput`] if `a` is empty. In that case `counters` is unchanged.
///
/// # Examples
/// ```
/// use majority::{Counters, find_majority};
///
/// let mut counters = Counters::new();
///
/// let nums = [3, 3, 4, 2, 3, 3, 3];
/// assert_eq!(find_majority(&nums, &mut counters), Ok(Some(3)));
///
/// let nums = [1, 2, 3, 4];
/// assert_eq!(find_majority(&nums, &mut counters), Ok(None));
///
/// assert_eq!(counters.comparisons(), 11);
/// assert_eq!(counters.array_accesses(), 11);
/// ```
pub fn find_majority<T: Eq + Copy>(a: &[T], counters: &mut Counters) -> Result<Option<T>> {
    let Some(&first) = a.first() else {
        return Err(Error::EmptyInput);
    };

    let (candidate, _) = a.iter().fold((first, 0usize), |(cand, count), &x| {
        counters.increment_comparisons();
        if count == 0 {
            (x, 1)
        } else if x == cand {
            (cand, count + 1)
        } else {
            (cand, count - 1)
        }
    });

    let occurrences = a
        .iter()
        .filter(|&&x| {
            counters.increment_array_accesses();
            x == candidate
        })
        .count();

    Ok((occurrences > a.len() / 2).then_some(candidate))
}
