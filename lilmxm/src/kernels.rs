//! Row-at-a-time kernels for `C<M,z> = C accum (A ⊕.⊗ Bᵗ)`
//!
//! One kernel per (mask class × accumulate) pair; the structural and
//! complemented mask classes share a kernel and differ only in the
//! `complement` flag. Each output row is computed into a private buffer and
//! written back with one `set_row` or `merge_row`, so no half-updated row is
//! ever visible. The kernels assume `C`, `A`, `B` and `M` are distinct and
//! their dimensions already validated.
//!
//! Row `i` of the product scans every row `j` of `B`. Empty rows of `B` and
//! non-overlapping rows are rejected by the dot product in O(1), and mask
//! membership is checked with a fresh [`MaskCursor`] per row of `A`.

use lilmxm_core::{
    dot, masked_accum, masked_merge, BinaryOp, MaskCursor, Row, RowStore, Semiring,
};

/// Compute `(A[i] ⊕.⊗ Bᵗ)` restricted to the columns `selected` admits
///
/// `selected` is called with strictly increasing `j`, and only for
/// non-empty rows of `B`.
fn product_row<S, B, T>(
    out: &mut Row<T>,
    a_row: &[(usize, S::Left)],
    b: &B,
    semiring: &S,
    mut selected: impl FnMut(usize) -> bool,
) where
    S: Semiring,
    B: RowStore<Value = S::Right>,
    T: From<S::Output>,
{
    out.clear();
    if a_row.is_empty() {
        return;
    }
    for j in 0..b.nrows() {
        let b_row = b.row(j);
        if b_row.is_empty() || !selected(j) {
            continue;
        }
        if let Some(t) = dot(a_row, b_row, semiring) {
            out.push((j, T::from(t)));
        }
    }
}

/// Write a freshly computed masked row into `C[i]`
///
/// Replace stores `fresh` as is; merge keeps prior `C[i]` values on the
/// columns the mask does not select.
pub(crate) fn write_masked_row<C, M, Z>(
    c: &mut C,
    i: usize,
    m_row: &[(usize, M)],
    complement: bool,
    fresh: Row<Z>,
    replace: bool,
) where
    C: RowStore,
    C::Value: Clone + From<Z>,
    Z: Clone,
{
    let row = if replace {
        fresh.into_iter().map(|(j, z)| (j, C::Value::from(z))).collect()
    } else {
        let mut merged = Vec::with_capacity(c.row(i).len() + fresh.len());
        masked_merge(&mut merged, m_row, complement, c.row(i), &fresh);
        merged
    };
    c.set_row(i, row);
}

/// Accumulate a freshly computed masked row into `C[i]`
///
/// `Z = mask .* (C[i] accum fresh)`; replace stores `Z`, merge stores
/// `Z` plus the prior `C[i]` values outside the mask.
pub(crate) fn write_masked_accum_row<C, M, T, Acc>(
    c: &mut C,
    i: usize,
    m_row: &[(usize, M)],
    complement: bool,
    accum: &Acc,
    fresh: &[(usize, T)],
    replace: bool,
) where
    C: RowStore,
    C::Value: Clone + From<Acc::Output>,
    T: Clone,
    Acc: BinaryOp<C::Value, T>,
    Acc::Output: Clone + From<C::Value> + From<T>,
{
    let mut z_row = Vec::new();
    masked_accum(&mut z_row, m_row, complement, accum, c.row(i), fresh);
    write_masked_row(c, i, m_row, complement, z_row, replace);
}

/// `C = A ⊕.⊗ Bᵗ`
pub(crate) fn no_mask_kernel<C, A, B, S>(c: &mut C, semiring: &S, a: &A, b: &B)
where
    C: RowStore,
    C::Value: From<S::Output>,
    A: RowStore<Value = S::Left>,
    B: RowStore<Value = S::Right>,
    S: Semiring,
{
    let mut c_row = Vec::new();
    for i in 0..a.nrows() {
        product_row(&mut c_row, a.row(i), b, semiring, |_| true);
        c.set_row(i, std::mem::take(&mut c_row));
    }
}

/// `C = C accum (A ⊕.⊗ Bᵗ)`
pub(crate) fn no_mask_accum_kernel<C, A, B, S, Acc>(
    c: &mut C,
    accum: &Acc,
    semiring: &S,
    a: &A,
    b: &B,
) where
    C: RowStore,
    C::Value: Clone + From<Acc::Output>,
    A: RowStore<Value = S::Left>,
    B: RowStore<Value = S::Right>,
    S: Semiring,
    S::Output: Clone,
    Acc: BinaryOp<C::Value, S::Output>,
    Acc::Output: From<C::Value> + From<S::Output>,
{
    let mut t_row: Row<S::Output> = Vec::new();
    for i in 0..a.nrows() {
        product_row(&mut t_row, a.row(i), b, semiring, |_| true);
        if !t_row.is_empty() {
            c.merge_row(i, &t_row, accum);
        }
    }
}

/// `C<M,z> = A ⊕.⊗ Bᵗ`, or `C<¬M,z>` when `complement` is set
pub(crate) fn mask_kernel<C, M, A, B, S>(
    c: &mut C,
    m: &M,
    complement: bool,
    semiring: &S,
    a: &A,
    b: &B,
    replace: bool,
) where
    C: RowStore,
    C::Value: Clone + From<S::Output>,
    M: RowStore,
    A: RowStore<Value = S::Left>,
    B: RowStore<Value = S::Right>,
    S: Semiring,
    S::Output: Clone,
{
    let mut t_row: Row<S::Output> = Vec::new();
    for i in 0..a.nrows() {
        let m_row = m.row(i);
        // An empty structural mask row selects nothing; its complement selects everything
        if complement || !m_row.is_empty() {
            let mut cursor = MaskCursor::new(m_row);
            product_row(&mut t_row, a.row(i), b, semiring, |j| cursor.selects(j, complement));
        } else {
            t_row.clear();
        }
        write_masked_row(c, i, m_row, complement, std::mem::take(&mut t_row), replace);
    }
}

/// `C<M,z> = C accum (A ⊕.⊗ Bᵗ)`, or `C<¬M,z>` when `complement` is set
#[allow(clippy::too_many_arguments)]
pub(crate) fn mask_accum_kernel<C, M, A, B, S, Acc>(
    c: &mut C,
    m: &M,
    complement: bool,
    accum: &Acc,
    semiring: &S,
    a: &A,
    b: &B,
    replace: bool,
) where
    C: RowStore,
    C::Value: Clone + From<Acc::Output>,
    M: RowStore,
    A: RowStore<Value = S::Left>,
    B: RowStore<Value = S::Right>,
    S: Semiring,
    S::Output: Clone,
    Acc: BinaryOp<C::Value, S::Output>,
    Acc::Output: Clone + From<C::Value> + From<S::Output>,
{
    let mut t_row: Row<S::Output> = Vec::new();
    for i in 0..a.nrows() {
        let m_row = m.row(i);
        if complement || !m_row.is_empty() {
            let mut cursor = MaskCursor::new(m_row);
            product_row(&mut t_row, a.row(i), b, semiring, |j| cursor.selects(j, complement));
        } else {
            t_row.clear();
        }
        write_masked_accum_row(c, i, m_row, complement, accum, &t_row, replace);
    }
}
