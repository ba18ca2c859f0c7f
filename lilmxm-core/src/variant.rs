//! Multiply variants and their short-circuit rules
//!
//! A call is classified once into one of six variants, the product of the
//! mask class and whether an accumulator is present. Each variant has a
//! fixed set of conditions under which the kernel can be skipped entirely.

/// How the write mask selects output columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaskClass {
    /// Every column is writable
    None,
    /// Columns stored in `M` are writable
    Structural,
    /// Columns absent from `M` are writable
    Complement,
}

impl MaskClass {
    /// Whether a mask operand is read at all
    pub const fn has_mask(self) -> bool {
        !matches!(self, MaskClass::None)
    }

    /// Whether mask membership is inverted
    pub const fn is_complement(self) -> bool {
        matches!(self, MaskClass::Complement)
    }
}

/// Outcome of a short-circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortCircuit {
    /// `C` ends up with no stored values
    Clear,
    /// `C` is left exactly as it was
    Unchanged,
}

/// Which operands hold no stored values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Emptiness {
    pub left: bool,
    pub right: bool,
    pub mask: bool,
}

impl Emptiness {
    /// Classify operands from their stored-value counts
    pub const fn from_nvals(a_nvals: usize, b_nvals: usize, m_nvals: Option<usize>) -> Self {
        Self {
            left: a_nvals == 0,
            right: b_nvals == 0,
            mask: match m_nvals {
                Some(n) => n == 0,
                None => false,
            },
        }
    }

    const fn product(self) -> bool {
        self.left || self.right
    }
}

/// One of the six (mask class × accumulate) multiply variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variant {
    pub mask: MaskClass,
    pub accumulate: bool,
}

impl Variant {
    pub const fn new(mask: MaskClass, accumulate: bool) -> Self {
        Self { mask, accumulate }
    }

    /// Stable operation name, used in logs and diagnostic snapshots
    pub const fn name(&self) -> &'static str {
        match (self.mask, self.accumulate) {
            (MaskClass::None, false) => "mxm_abt",
            (MaskClass::None, true) => "mxm_abt_accum",
            (MaskClass::Structural, false) => "mxm_abt_masked",
            (MaskClass::Structural, true) => "mxm_abt_masked_accum",
            (MaskClass::Complement, false) => "mxm_abt_comp_masked",
            (MaskClass::Complement, true) => "mxm_abt_comp_masked_accum",
        }
    }

    /// Decide whether the kernel can be skipped
    ///
    /// `replace` is ignored without a mask. With a complemented mask only the
    /// non-accumulating replace case may skip: prior `C` entries outside the
    /// complement still have to be dropped or merged.
    pub const fn short_circuit(&self, replace: bool, empty: Emptiness) -> Option<ShortCircuit> {
        match (self.mask, self.accumulate) {
            (MaskClass::None, false) if empty.product() => Some(ShortCircuit::Clear),
            (MaskClass::None, true) if empty.product() => Some(ShortCircuit::Unchanged),
            (MaskClass::Structural, false) if replace && (empty.product() || empty.mask) => {
                Some(ShortCircuit::Clear)
            }
            (MaskClass::Structural, _) if empty.mask => {
                if replace {
                    Some(ShortCircuit::Clear)
                } else {
                    Some(ShortCircuit::Unchanged)
                }
            }
            (MaskClass::Complement, false) if replace && empty.product() => {
                Some(ShortCircuit::Clear)
            }
            _ => None,
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
