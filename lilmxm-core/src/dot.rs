//! Semiring dot product of two sparse rows

use crate::traits::Semiring;

/// Fold `lhs[k] ⊗ rhs[k]` with `⊕` over the columns both rows store
///
/// Both rows must be ascending and column-unique. Returns `None` when the
/// rows share no column, which callers treat as "no entry" rather than an
/// explicit zero. Runs a two-cursor merge-join, O(|lhs| + |rhs|), and rejects
/// empty or non-overlapping rows in O(1).
pub fn dot<S: Semiring>(
    lhs: &[(usize, S::Left)],
    rhs: &[(usize, S::Right)],
    semiring: &S,
) -> Option<S::Output> {
    let (Some(l_first), Some(l_last)) = (lhs.first(), lhs.last()) else {
        return None;
    };
    let (Some(r_first), Some(r_last)) = (rhs.first(), rhs.last()) else {
        return None;
    };
    if l_last.0 < r_first.0 || r_last.0 < l_first.0 {
        return None;
    }

    let mut acc: Option<S::Output> = None;
    let (mut l, mut r) = (0, 0);
    while l < lhs.len() && r < rhs.len() {
        let (lj, lv) = &lhs[l];
        let (rj, rv) = &rhs[r];
        if lj < rj {
            l += 1;
        } else if rj < lj {
            r += 1;
        } else {
            let product = semiring.mult(lv, rv);
            acc = Some(match acc {
                Some(sum) => semiring.add(sum, product),
                None => product,
            });
            l += 1;
            r += 1;
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{ArithmeticSemiring, LogicalSemiring, MinPlusSemiring};

    #[test]
    fn test_dot_sums_aligned_products() {
        let a = [(0, 2.0), (3, 4.0), (5, 1.0)];
        let b = [(1, 9.0), (3, 0.5), (5, 3.0)];
        assert_eq!(dot(&a, &b, &ArithmeticSemiring::<f64>::new()), Some(5.0));
    }

    #[test]
    fn test_disjoint_rows_give_no_contribution() {
        let a = [(0, 1), (2, 1)];
        let b = [(1, 1), (3, 1)];
        assert_eq!(dot(&a, &b, &ArithmeticSemiring::<i32>::new()), None);

        // Ranges that do not overlap are rejected without scanning
        let c = [(7, 1), (9, 1)];
        assert_eq!(dot(&a, &c, &ArithmeticSemiring::<i32>::new()), None);
    }

    #[test]
    fn test_empty_row_gives_no_contribution() {
        let a: [(usize, i64); 0] = [];
        let b = [(0, 3i64)];
        let s = ArithmeticSemiring::<i64>::new();
        assert_eq!(dot(&a, &b, &s), None);
        assert_eq!(dot(&b, &a, &s), None);
    }

    #[test]
    fn test_explicit_zero_product_is_still_a_contribution() {
        let a = [(4, 0.0)];
        let b = [(4, 8.0)];
        assert_eq!(dot(&a, &b, &ArithmeticSemiring::<f64>::new()), Some(0.0));
    }

    #[test]
    fn test_min_plus_picks_shortest_relay() {
        let a = [(0, 4u32), (1, 1u32), (2, 7u32)];
        let b = [(0, 1u32), (1, 9u32), (2, 0u32)];
        assert_eq!(dot(&a, &b, &MinPlusSemiring::<u32>::new()), Some(5));
    }

    #[test]
    fn test_logical_semiring() {
        let a = [(0, false), (2, true)];
        let b = [(0, true), (2, true)];
        assert_eq!(dot(&a, &b, &LogicalSemiring), Some(true));
        assert_eq!(dot(&a[..1], &b, &LogicalSemiring), Some(false));
    }
}
