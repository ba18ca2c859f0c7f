//! Column-wise row combinators keyed by mask membership
//!
//! All three combinators walk the union of the `prior` and `fresh` columns in
//! ascending order, so their output rows stay ascending and column-unique.

use alloc::vec::Vec;

use crate::mask::MaskCursor;
use crate::traits::BinaryOp;

/// Visit every column of `prior ∪ fresh` once, in ascending order
fn union_walk<P, F>(
    prior: &[(usize, P)],
    fresh: &[(usize, F)],
    mut visit: impl FnMut(usize, Option<&P>, Option<&F>),
) {
    let (mut p, mut f) = (0, 0);
    loop {
        match (prior.get(p), fresh.get(f)) {
            (Some((pj, pv)), Some((fj, fv))) => {
                if pj < fj {
                    visit(*pj, Some(pv), None);
                    p += 1;
                } else if fj < pj {
                    visit(*fj, None, Some(fv));
                    f += 1;
                } else {
                    visit(*pj, Some(pv), Some(fv));
                    p += 1;
                    f += 1;
                }
            }
            (Some((pj, pv)), None) => {
                visit(*pj, Some(pv), None);
                p += 1;
            }
            (None, Some((fj, fv))) => {
                visit(*fj, None, Some(fv));
                f += 1;
            }
            (None, None) => break,
        }
    }
}

/// Select, per column, `fresh` where the mask selects and `prior` elsewhere
///
/// With `complement` set, selection means the column is absent from `mask`.
/// A column present in neither row contributes nothing. Output is appended
/// to `result`.
pub fn masked_merge<C, M, Z>(
    result: &mut Vec<(usize, C)>,
    mask: &[(usize, M)],
    complement: bool,
    prior: &[(usize, C)],
    fresh: &[(usize, Z)],
) where
    C: Clone + From<Z>,
    Z: Clone,
{
    let mut cursor = MaskCursor::new(mask);
    union_walk(prior, fresh, |j, prior_value, fresh_value| {
        if cursor.selects(j, complement) {
            if let Some(z) = fresh_value {
                result.push((j, C::from(z.clone())));
            }
        } else if let Some(c) = prior_value {
            result.push((j, c.clone()));
        }
    });
}

/// Accumulate `fresh` into `prior` on the columns the mask selects
///
/// Where both sides hold a value the result is `accum(prior, fresh)`; a lone
/// value passes through unchanged. Unselected columns are omitted, leaving
/// them to an outer [`masked_merge`]. Output is appended to `result`.
pub fn masked_accum<C, M, T, Op>(
    result: &mut Vec<(usize, Op::Output)>,
    mask: &[(usize, M)],
    complement: bool,
    accum: &Op,
    prior: &[(usize, C)],
    fresh: &[(usize, T)],
) where
    C: Clone,
    T: Clone,
    Op: BinaryOp<C, T>,
    Op::Output: From<C> + From<T>,
{
    let mut cursor = MaskCursor::new(mask);
    union_walk(prior, fresh, |j, prior_value, fresh_value| {
        if !cursor.selects(j, complement) {
            return;
        }
        let value = match (prior_value, fresh_value) {
            (Some(c), Some(t)) => accum.apply(c, t),
            (Some(c), None) => <Op::Output as From<C>>::from(c.clone()),
            (None, Some(t)) => <Op::Output as From<T>>::from(t.clone()),
            (None, None) => return,
        };
        result.push((j, value));
    });
}

/// Unmasked accumulate: the union of both rows, combining shared columns
pub fn merge_accum<C, T, Op>(
    prior: &[(usize, C)],
    fresh: &[(usize, T)],
    accum: &Op,
) -> Vec<(usize, Op::Output)>
where
    C: Clone,
    T: Clone,
    Op: BinaryOp<C, T>,
    Op::Output: From<C> + From<T>,
{
    let mut result = Vec::with_capacity(prior.len().max(fresh.len()));
    masked_accum::<C, (), T, Op>(&mut result, &[], true, accum, prior, fresh);
    result
}
