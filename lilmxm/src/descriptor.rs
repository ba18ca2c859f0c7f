//! Per-call write policy

use lilmxm_core::MaskClass;

/// Options controlling how a multiply writes into `C`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Descriptor {
    /// Discard prior `C` entries the call does not select (otherwise merge)
    pub replace: bool,
    /// Select columns absent from the mask instead of present ones
    pub complement_mask: bool,
}

impl Descriptor {
    /// Merge policy with a structural mask
    pub const fn new() -> Self {
        Self {
            replace: false,
            complement_mask: false,
        }
    }

    /// Set the replace flag
    pub const fn with_replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    /// Set whether the mask is complemented
    pub const fn with_complemented_mask(mut self, complement: bool) -> Self {
        self.complement_mask = complement;
        self
    }

    /// Mask class of a call made with this descriptor
    ///
    /// Without a mask operand the complement flag has nothing to invert.
    pub const fn mask_class(&self, has_mask: bool) -> MaskClass {
        match (has_mask, self.complement_mask) {
            (false, _) => MaskClass::None,
            (true, false) => MaskClass::Structural,
            (true, true) => MaskClass::Complement,
        }
    }
}
