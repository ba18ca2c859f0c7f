//! Entry points for `C<M,z> = C accum (A ⊕.⊗ Bᵗ)`
//!
//! Every call is resolved once into a [`Variant`], validated, checked against
//! the variant's short-circuit rules and then run through exactly one kernel.
//!
//! `C` may share storage with `B`. In that case the product is computed
//! into a temporary with replace semantics while `B` is intact, and then
//! folded into `C` with the requested policy. Sharing storage between `C`
//! and `A` or `M` is not supported; it is reported as [`Error::Busy`]
//! before anything is written.

use std::fmt::Display;
use std::sync::RwLockReadGuard;

use log::{debug, trace};

use lilmxm_core::{
    validate_mxm_dimensions, BinaryOp, Emptiness, MxmShapes, NoAccumulate, RowStore, Semiring,
    ShortCircuit, Variant,
};

use crate::descriptor::Descriptor;
use crate::diagnostics;
use crate::error::Result;
use crate::kernels::{
    mask_accum_kernel, mask_kernel, no_mask_accum_kernel, no_mask_kernel, write_masked_accum_row,
    write_masked_row,
};
use crate::lil_matrix::LilSparseMatrix;
use crate::matrix::Matrix;

/// Operands of one call, tagged by variant
enum Plan<'a, MT, Acc> {
    Plain,
    Accum(&'a Acc),
    Masked(&'a LilSparseMatrix<MT>, bool),
    MaskedAccum(&'a LilSparseMatrix<MT>, bool, &'a Acc),
}

impl<MT, Acc> Plan<'_, MT, Acc> {
    fn mask(&self) -> Option<&LilSparseMatrix<MT>> {
        match self {
            Plan::Masked(m, _) | Plan::MaskedAccum(m, _, _) => Some(*m),
            Plan::Plain | Plan::Accum(_) => None,
        }
    }
}

/// Validate shapes and evaluate the variant's short-circuit rules
fn preflight<MT, AT, BT, Acc>(
    variant: Variant,
    replace: bool,
    output: (usize, usize),
    plan: &Plan<'_, MT, Acc>,
    a: &LilSparseMatrix<AT>,
    b: &LilSparseMatrix<BT>,
) -> Result<Option<ShortCircuit>> {
    let mask = plan.mask();
    validate_mxm_dimensions(&MxmShapes {
        output,
        mask: mask.map(RowStore::dimensions),
        left: a.dimensions(),
        right: b.dimensions(),
    })?;

    let empty = Emptiness::from_nvals(a.nvals(), b.nvals(), mask.map(RowStore::nvals));
    let outcome = variant.short_circuit(replace, empty);
    if let Some(outcome) = outcome {
        debug!("{variant}: short-circuit ({outcome:?}), empty operands {empty:?}");
    }
    Ok(outcome)
}

/// Unified entry point; the named variants below delegate here
///
/// `mask` and `accum` select the variant; `desc` supplies the replace flag
/// and whether the mask is complemented. Without a mask, replace has no
/// meaning and is ignored. Nothing is written to `c` unless every operand
/// validates.
pub fn mxm<CT, MT, AT, BT, S, Acc>(
    c: &Matrix<CT>,
    mask: Option<&Matrix<MT>>,
    accum: Option<&Acc>,
    semiring: &S,
    a: &Matrix<AT>,
    b: &Matrix<BT>,
    desc: &Descriptor,
) -> Result<()>
where
    S: Semiring<Left = AT, Right = BT>,
    S::Output: Clone,
    CT: Clone + Display + From<S::Output> + From<Acc::Output>,
    Acc: BinaryOp<CT, S::Output>,
    Acc::Output: Clone + From<CT> + From<S::Output>,
{
    let variant = Variant::new(desc.mask_class(mask.is_some()), accum.is_some());
    let replace = desc.replace && variant.mask.has_mask();
    let complement = variant.mask.is_complement();
    debug!("{variant}: replace={replace}");

    let a_guard = a.read_as("A")?;
    let m_guard: Option<RwLockReadGuard<'_, LilSparseMatrix<MT>>> =
        mask.map(|m| m.read_as("M")).transpose()?;

    let plan = match (m_guard.as_deref(), accum) {
        (None, None) => Plan::Plain,
        (None, Some(acc)) => Plan::Accum(acc),
        (Some(m), None) => Plan::Masked(m, complement),
        (Some(m), Some(acc)) => Plan::MaskedAccum(m, complement, acc),
    };

    if c.same_storage(b) {
        trace!("{variant}: output shares storage with B, computing into a temporary");
        run_aliased(variant, replace, &plan, c, semiring, &a_guard, b)
    } else {
        run_direct(variant, replace, &plan, c, semiring, &a_guard, b)
    }
}

fn run_direct<CT, MT, AT, BT, S, Acc>(
    variant: Variant,
    replace: bool,
    plan: &Plan<'_, MT, Acc>,
    c: &Matrix<CT>,
    semiring: &S,
    a: &LilSparseMatrix<AT>,
    b: &Matrix<BT>,
) -> Result<()>
where
    S: Semiring<Left = AT, Right = BT>,
    S::Output: Clone,
    CT: Clone + Display + From<S::Output> + From<Acc::Output>,
    Acc: BinaryOp<CT, S::Output>,
    Acc::Output: Clone + From<CT> + From<S::Output>,
{
    let mut c_guard = c.write_as("C")?;
    let b_guard = b.read_as("B")?;
    let c_store: &mut LilSparseMatrix<CT> = &mut c_guard;
    let b_store: &LilSparseMatrix<BT> = &b_guard;

    match preflight(variant, replace, c_store.dimensions(), plan, a, b_store)? {
        Some(ShortCircuit::Clear) => c_store.clear(),
        Some(ShortCircuit::Unchanged) => {}
        None => match *plan {
            Plan::Plain => no_mask_kernel(c_store, semiring, a, b_store),
            Plan::Accum(acc) => no_mask_accum_kernel(c_store, acc, semiring, a, b_store),
            Plan::Masked(m, comp) => mask_kernel(c_store, m, comp, semiring, a, b_store, replace),
            Plan::MaskedAccum(m, comp, acc) => {
                mask_accum_kernel(c_store, m, comp, acc, semiring, a, b_store, replace)
            }
        },
    }

    diagnostics::emit(variant.name(), &*c_store);
    Ok(())
}

/// Product staged while `B` is still intact, with what folding it needs
enum Staged<'a, CT, D, MT, Acc> {
    Skip(ShortCircuit),
    Product(LilSparseMatrix<CT>),
    MaskedProduct(LilSparseMatrix<CT>, &'a LilSparseMatrix<MT>, bool),
    Accumulated(LilSparseMatrix<D>, &'a Acc),
    MaskedAccumulated(LilSparseMatrix<D>, &'a LilSparseMatrix<MT>, bool, &'a Acc),
}

fn run_aliased<CT, MT, AT, BT, S, Acc>(
    variant: Variant,
    replace: bool,
    plan: &Plan<'_, MT, Acc>,
    c: &Matrix<CT>,
    semiring: &S,
    a: &LilSparseMatrix<AT>,
    b: &Matrix<BT>,
) -> Result<()>
where
    S: Semiring<Left = AT, Right = BT>,
    S::Output: Clone,
    CT: Clone + Display + From<S::Output> + From<Acc::Output>,
    Acc: BinaryOp<CT, S::Output>,
    Acc::Output: Clone + From<CT> + From<S::Output>,
{
    // B is C: read it in its pre-call state and release it before C is
    // locked for writing. The temporary always holds the replace-masked
    // product; the requested policy is applied while folding.
    let staged: Staged<'_, CT, S::Output, MT, Acc> = {
        let b_guard = b.read_as("B")?;
        let b_store: &LilSparseMatrix<BT> = &b_guard;
        let (nrows, ncols) = b_store.dimensions();

        match preflight(variant, replace, (nrows, ncols), plan, a, b_store)? {
            Some(outcome) => Staged::Skip(outcome),
            None => match *plan {
                Plan::Plain => {
                    let mut tmp = LilSparseMatrix::<CT>::new(nrows, ncols);
                    no_mask_kernel(&mut tmp, semiring, a, b_store);
                    Staged::Product(tmp)
                }
                Plan::Masked(m, comp) => {
                    let mut tmp = LilSparseMatrix::<CT>::new(nrows, ncols);
                    mask_kernel(&mut tmp, m, comp, semiring, a, b_store, true);
                    Staged::MaskedProduct(tmp, m, comp)
                }
                Plan::Accum(acc) => {
                    let mut tmp = LilSparseMatrix::<S::Output>::new(nrows, ncols);
                    no_mask_kernel(&mut tmp, semiring, a, b_store);
                    Staged::Accumulated(tmp, acc)
                }
                Plan::MaskedAccum(m, comp, acc) => {
                    let mut tmp = LilSparseMatrix::<S::Output>::new(nrows, ncols);
                    mask_kernel(&mut tmp, m, comp, semiring, a, b_store, true);
                    Staged::MaskedAccumulated(tmp, m, comp, acc)
                }
            },
        }
    };

    let mut c_guard = c.write_as("C")?;
    let c_store: &mut LilSparseMatrix<CT> = &mut c_guard;

    match staged {
        Staged::Skip(ShortCircuit::Clear) => c_store.clear(),
        Staged::Skip(ShortCircuit::Unchanged) => {}
        Staged::Product(mut tmp) => c_store.swap(&mut tmp),
        Staged::MaskedProduct(mut tmp, _, _) if replace => c_store.swap(&mut tmp),
        Staged::MaskedProduct(tmp, m, comp) => {
            for (i, t_row) in tmp.into_rows().into_iter().enumerate() {
                write_masked_row(c_store, i, m.row(i), comp, t_row, false);
            }
        }
        Staged::Accumulated(tmp, acc) => {
            for (i, t_row) in tmp.into_rows().into_iter().enumerate() {
                c_store.merge_row(i, &t_row, acc);
            }
        }
        Staged::MaskedAccumulated(tmp, m, comp, acc) => {
            for (i, t_row) in tmp.into_rows().into_iter().enumerate() {
                write_masked_accum_row(c_store, i, m.row(i), comp, acc, &t_row, replace);
            }
        }
    }

    diagnostics::emit(variant.name(), &*c_store);
    Ok(())
}

/// `C = A ⊕.⊗ Bᵗ`
pub fn mxm_abt<CT, AT, BT, S>(
    c: &Matrix<CT>,
    semiring: &S,
    a: &Matrix<AT>,
    b: &Matrix<BT>,
) -> Result<()>
where
    S: Semiring<Left = AT, Right = BT>,
    S::Output: Clone,
    CT: Clone + Display + From<S::Output>,
{
    mxm::<CT, (), AT, BT, S, NoAccumulate>(c, None, None, semiring, a, b, &Descriptor::new())
}

/// `C = C accum (A ⊕.⊗ Bᵗ)`
pub fn mxm_abt_accum<CT, AT, BT, S, Acc>(
    c: &Matrix<CT>,
    accum: &Acc,
    semiring: &S,
    a: &Matrix<AT>,
    b: &Matrix<BT>,
) -> Result<()>
where
    S: Semiring<Left = AT, Right = BT>,
    S::Output: Clone,
    CT: Clone + Display + From<S::Output> + From<Acc::Output>,
    Acc: BinaryOp<CT, S::Output>,
    Acc::Output: Clone + From<CT> + From<S::Output>,
{
    mxm::<CT, (), AT, BT, S, Acc>(c, None, Some(accum), semiring, a, b, &Descriptor::new())
}

/// `C<M,z> = A ⊕.⊗ Bᵗ`
pub fn mxm_abt_masked<CT, MT, AT, BT, S>(
    c: &Matrix<CT>,
    mask: &Matrix<MT>,
    semiring: &S,
    a: &Matrix<AT>,
    b: &Matrix<BT>,
    replace: bool,
) -> Result<()>
where
    S: Semiring<Left = AT, Right = BT>,
    S::Output: Clone,
    CT: Clone + Display + From<S::Output>,
{
    let desc = Descriptor::new().with_replace(replace);
    mxm::<CT, MT, AT, BT, S, NoAccumulate>(c, Some(mask), None, semiring, a, b, &desc)
}

/// `C<M,z> = C accum (A ⊕.⊗ Bᵗ)`
#[allow(clippy::too_many_arguments)]
pub fn mxm_abt_masked_accum<CT, MT, AT, BT, S, Acc>(
    c: &Matrix<CT>,
    mask: &Matrix<MT>,
    accum: &Acc,
    semiring: &S,
    a: &Matrix<AT>,
    b: &Matrix<BT>,
    replace: bool,
) -> Result<()>
where
    S: Semiring<Left = AT, Right = BT>,
    S::Output: Clone,
    CT: Clone + Display + From<S::Output> + From<Acc::Output>,
    Acc: BinaryOp<CT, S::Output>,
    Acc::Output: Clone + From<CT> + From<S::Output>,
{
    let desc = Descriptor::new().with_replace(replace);
    mxm(c, Some(mask), Some(accum), semiring, a, b, &desc)
}

/// `C<¬M,z> = A ⊕.⊗ Bᵗ`
pub fn mxm_abt_comp_masked<CT, MT, AT, BT, S>(
    c: &Matrix<CT>,
    mask: &Matrix<MT>,
    semiring: &S,
    a: &Matrix<AT>,
    b: &Matrix<BT>,
    replace: bool,
) -> Result<()>
where
    S: Semiring<Left = AT, Right = BT>,
    S::Output: Clone,
    CT: Clone + Display + From<S::Output>,
{
    let desc = Descriptor::new()
        .with_replace(replace)
        .with_complemented_mask(true);
    mxm::<CT, MT, AT, BT, S, NoAccumulate>(c, Some(mask), None, semiring, a, b, &desc)
}

/// `C<¬M,z> = C accum (A ⊕.⊗ Bᵗ)`
#[allow(clippy::too_many_arguments)]
pub fn mxm_abt_comp_masked_accum<CT, MT, AT, BT, S, Acc>(
    c: &Matrix<CT>,
    mask: &Matrix<MT>,
    accum: &Acc,
    semiring: &S,
    a: &Matrix<AT>,
    b: &Matrix<BT>,
    replace: bool,
) -> Result<()>
where
    S: Semiring<Left = AT, Right = BT>,
    S::Output: Clone,
    CT: Clone + Display + From<S::Output> + From<Acc::Output>,
    Acc: BinaryOp<CT, S::Output>,
    Acc::Output: Clone + From<CT> + From<S::Output>,
{
    let desc = Descriptor::new()
        .with_replace(replace)
        .with_complemented_mask(true);
    mxm(c, Some(mask), Some(accum), semiring, a, b, &desc)
}
