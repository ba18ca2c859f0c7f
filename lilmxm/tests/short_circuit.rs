//! Empty-operand outcomes for every variant

mod common;

use common::{lil, run};
use lilmxm::{LilSparseMatrix, MaskClass, Matrix, Variant};

const NONE: Variant = Variant::new(MaskClass::None, false);
const NONE_ACCUM: Variant = Variant::new(MaskClass::None, true);
const MASK: Variant = Variant::new(MaskClass::Structural, false);
const MASK_ACCUM: Variant = Variant::new(MaskClass::Structural, true);
const COMP: Variant = Variant::new(MaskClass::Complement, false);
const COMP_ACCUM: Variant = Variant::new(MaskClass::Complement, true);

fn prior() -> LilSparseMatrix<i64> {
    lil(3, 3, &[(0, 0, 1), (0, 2, 2), (1, 1, 3), (2, 0, 4)])
}

fn full() -> LilSparseMatrix<i64> {
    lil(3, 3, &[(0, 0, 1), (0, 1, 1), (1, 1, 2), (2, 2, 3)])
}

fn mask() -> LilSparseMatrix<i64> {
    lil(3, 3, &[(0, 0, 0), (1, 0, 0), (2, 0, 0)])
}

fn empty() -> LilSparseMatrix<i64> {
    LilSparseMatrix::new(3, 3)
}

/// Run `variant` against a fresh copy of `prior()` and return the result
fn outcome(
    variant: Variant,
    replace: bool,
    m: LilSparseMatrix<i64>,
    a: LilSparseMatrix<i64>,
    b: LilSparseMatrix<i64>,
) -> LilSparseMatrix<i64> {
    let c = Matrix::from(prior());
    run(variant, replace, &c, &m.into(), &a.into(), &b.into()).unwrap();
    c.snapshot().unwrap()
}

#[test]
fn test_no_mask_clears_on_empty_input() {
    for replace in [false, true] {
        assert_eq!(outcome(NONE, replace, mask(), empty(), full()), empty());
        assert_eq!(outcome(NONE, replace, mask(), full(), empty()), empty());
    }
}

#[test]
fn test_no_mask_accum_is_unchanged_on_empty_input() {
    for replace in [false, true] {
        assert_eq!(outcome(NONE_ACCUM, replace, mask(), empty(), full()), prior());
        assert_eq!(outcome(NONE_ACCUM, replace, empty(), full(), empty()), prior());
    }
}

#[test]
fn test_masked_replace_clears() {
    assert_eq!(outcome(MASK, true, mask(), empty(), full()), empty());
    assert_eq!(outcome(MASK, true, mask(), full(), empty()), empty());
    assert_eq!(outcome(MASK, true, empty(), full(), full()), empty());
    assert_eq!(outcome(MASK_ACCUM, true, empty(), full(), full()), empty());
}

#[test]
fn test_masked_merge_with_empty_mask_is_unchanged() {
    assert_eq!(outcome(MASK, false, empty(), full(), full()), prior());
    assert_eq!(outcome(MASK_ACCUM, false, empty(), full(), full()), prior());
}

#[test]
fn test_masked_merge_with_empty_input_still_runs() {
    // Column 0 is selected and nothing is computed there, so it is dropped
    let expected = lil(3, 3, &[(0, 2, 2), (1, 1, 3)]);
    assert_eq!(outcome(MASK, false, mask(), empty(), full()), expected);

    // With an accumulator the prior values pass through
    assert_eq!(outcome(MASK_ACCUM, false, mask(), empty(), full()), prior());
    assert_eq!(
        outcome(MASK_ACCUM, true, mask(), empty(), full()),
        lil(3, 3, &[(0, 0, 1), (2, 0, 4)])
    );
}

#[test]
fn test_comp_masked_replace_clears_on_empty_input() {
    assert_eq!(outcome(COMP, true, mask(), empty(), full()), empty());
    assert_eq!(outcome(COMP, true, mask(), full(), empty()), empty());
}

#[test]
fn test_comp_masked_merge_still_runs() {
    // Prior values inside M survive, values outside M are replaced by nothing
    let expected = lil(3, 3, &[(0, 0, 1), (2, 0, 4)]);
    assert_eq!(outcome(COMP, false, mask(), empty(), full()), expected);
    assert_eq!(outcome(COMP, false, mask(), full(), empty()), expected);
}

#[test]
fn test_comp_masked_accum_still_runs() {
    assert_eq!(
        outcome(COMP_ACCUM, true, mask(), empty(), full()),
        lil(3, 3, &[(0, 2, 2), (1, 1, 3)])
    );
    assert_eq!(outcome(COMP_ACCUM, false, mask(), empty(), full()), prior());

    // An empty complemented mask selects everything
    assert_eq!(outcome(COMP_ACCUM, true, empty(), empty(), empty()), prior());
}

#[test]
fn test_empty_complemented_mask_selects_everything() {
    assert_eq!(outcome(COMP, false, empty(), empty(), full()), empty());
    assert_eq!(
        outcome(COMP, true, empty(), full(), full()),
        outcome(NONE, false, empty(), full(), full())
    );
}
