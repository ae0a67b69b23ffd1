//! Greedy pairing of `after` array elements with `before` elements.

use serde_json::Value;

use crate::similarity::{score, Similarity};

/// For each `after` element, the index of the `before` element it borrows
/// ordering from, or `None` when no acceptable candidate is left.
///
/// `after` elements are visited in order and each claims the best-scoring
/// unclaimed `before` element. A tie goes to the `before` element at the same
/// index as the `after` element, otherwise to the lowest index. The result is
/// greedy, not an optimal assignment: an early element may claim a candidate
/// a later element would have scored higher against.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_order::pair_elements;
///
/// let before = [json!({"id": 1, "name": "Alice"}), json!({"id": 2, "name": "Bob"})];
/// let after = [json!({"name": "Bob"}), json!({"zip": "00000"})];
/// assert_eq!(pair_elements(&before, &after), vec![Some(1), None]);
/// ```
pub fn pair_elements(before: &[Value], after: &[Value]) -> Vec<Option<usize>> {
    let mut claimed = vec![false; before.len()];
    let mut pairs = Vec::with_capacity(after.len());
    for (position, element) in after.iter().enumerate() {
        let best = best_candidate(before, &claimed, position, element);
        if let Some(index) = best {
            claimed[index] = true;
        }
        pairs.push(best);
    }
    pairs
}

fn best_candidate(
    before: &[Value],
    claimed: &[bool],
    position: usize,
    element: &Value,
) -> Option<usize> {
    let mut best: Option<(usize, Similarity)> = None;
    for (index, candidate) in before.iter().enumerate() {
        if claimed[index] {
            continue;
        }
        let Some(similarity) = score(candidate, element) else {
            continue;
        };
        if !similarity.is_acceptable() {
            continue;
        }
        let better = match best {
            None => true,
            Some((_, top)) => similarity > top || (similarity == top && index == position),
        };
        if better {
            best = Some((index, similarity));
        }
    }
    best.map(|(index, _)| index)
}
