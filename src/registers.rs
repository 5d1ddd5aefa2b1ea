//! The VM's two registers: the accumulator and the boolean flag.

use crate::codon::Codon;

/// Accumulator (`ACC`) and flag (`FLAG`) registers.
///
/// Unlike `fuel-vm`'s 64-slot general-purpose register file, Helix has
/// exactly two registers with no addressing mode of their own — every
/// instruction that touches them names `ACC` or `FLAG` directly in its
/// opcode, so there is no register id to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    acc: Codon,
    flag: bool,
}

impl Registers {
    pub fn acc_load(&mut self, c: Codon) {
        self.acc = c;
    }

    pub const fn acc_get(&self) -> Codon {
        self.acc
    }

    pub fn flag_set(&mut self, b: bool) {
        self.flag = b;
    }

    pub const fn flag_get(&self) -> bool {
        self.flag
    }

    /// `ACC <- (ACC.unsigned + s) mod 64`.
    pub fn acc_add_signed(&mut self, s: i8) {
        self.acc = Codon::from_signed(self.acc.to_unsigned() as i32 + s as i32);
    }
}
