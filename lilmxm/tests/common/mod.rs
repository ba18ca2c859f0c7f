//! Shared utilities for integration tests

#![allow(dead_code)]

use lilmxm::{
    mxm, ArithmeticSemiring, Descriptor, LilSparseMatrix, MaskClass, Matrix, Plus, RowStore,
    Variant,
};
use proptest::prelude::*;

/// Every (mask class × accumulate) combination
pub const ALL_VARIANTS: [Variant; 6] = [
    Variant::new(MaskClass::None, false),
    Variant::new(MaskClass::None, true),
    Variant::new(MaskClass::Structural, false),
    Variant::new(MaskClass::Structural, true),
    Variant::new(MaskClass::Complement, false),
    Variant::new(MaskClass::Complement, true),
];

/// Operands of one integer multiply; `c` and `m` are `rows(a) x rows(b)`
#[derive(Debug, Clone)]
pub struct Operands {
    pub a: LilSparseMatrix<i64>,
    pub b: LilSparseMatrix<i64>,
    pub c: LilSparseMatrix<i64>,
    pub m: LilSparseMatrix<i64>,
}

pub fn lil(nrows: usize, ncols: usize, triples: &[(usize, usize, i64)]) -> LilSparseMatrix<i64> {
    LilSparseMatrix::from_triples(nrows, ncols, triples.iter().copied()).unwrap()
}

/// Run `variant` through the unified entry point with (+, ×) and `Plus`
pub fn run(
    variant: Variant,
    replace: bool,
    c: &Matrix<i64>,
    m: &Matrix<i64>,
    a: &Matrix<i64>,
    b: &Matrix<i64>,
) -> lilmxm::Result<()> {
    let desc = Descriptor::new()
        .with_replace(replace)
        .with_complemented_mask(variant.mask.is_complement());
    let plus = Plus::<i64>::new();
    let mask = variant.mask.has_mask().then_some(m);
    let accum = variant.accumulate.then_some(&plus);
    mxm(c, mask, accum, &ArithmeticSemiring::<i64>::new(), a, b, &desc)
}

/// Entry-by-entry evaluation of `C<M,z> = C accum (A ⊕.⊗ Bᵗ)`
pub fn reference(variant: Variant, replace: bool, ops: &Operands) -> LilSparseMatrix<i64> {
    let Operands { a, b, c, m } = ops;
    let (nrows, ncols) = c.dimensions();
    let mut triples = Vec::new();

    for i in 0..nrows {
        for j in 0..ncols {
            let mut product = None;
            for k in 0..a.ncols() {
                if let (Some(x), Some(y)) = (a.get_element(i, k), b.get_element(j, k)) {
                    product = Some(product.unwrap_or(0) + x * y);
                }
            }

            let prior = c.get_element(i, j).copied();
            let selected = !variant.mask.has_mask()
                || m.get_element(i, j).is_some() != variant.mask.is_complement();
            let z = if variant.accumulate {
                match (prior, product) {
                    (Some(x), Some(y)) => Some(x + y),
                    (x, None) => x,
                    (None, y) => y,
                }
            } else {
                product
            };

            let value = if selected {
                z
            } else if replace {
                None
            } else {
                prior
            };
            if let Some(v) = value {
                triples.push((i, j, v));
            }
        }
    }
    LilSparseMatrix::from_triples(nrows, ncols, triples).unwrap()
}

/// Random sparse matrix with small values
pub fn sparse(nrows: usize, ncols: usize) -> impl Strategy<Value = LilSparseMatrix<i64>> {
    proptest::collection::vec(proptest::option::weighted(0.35, -4i64..=4), nrows * ncols).prop_map(
        move |cells| {
            let triples = cells
                .into_iter()
                .enumerate()
                .filter_map(|(idx, v)| v.map(|v| (idx / ncols, idx % ncols, v)));
            LilSparseMatrix::from_triples(nrows, ncols, triples).unwrap()
        },
    )
}

/// Operands of arbitrary compatible shapes, including empty extents
pub fn operands() -> impl Strategy<Value = Operands> {
    (0usize..5, 0usize..5, 0usize..5)
        .prop_flat_map(|(n, p, k)| (sparse(n, k), sparse(p, k), sparse(n, p), sparse(n, p)))
        .prop_map(|(a, b, c, m)| Operands { a, b, c, m })
}

/// Square operands, so that `C` can stand in for `B`
pub fn square_operands() -> impl Strategy<Value = Operands> {
    (1usize..6)
        .prop_flat_map(|n| (sparse(n, n), sparse(n, n), sparse(n, n), sparse(n, n)))
        .prop_map(|(a, b, c, m)| Operands { a, b, c, m })
}

pub fn variant() -> impl Strategy<Value = Variant> {
    proptest::sample::select(ALL_VARIANTS.to_vec())
}
