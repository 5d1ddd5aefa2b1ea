//! Register/arithmetic instructions: LDI, LDF, LD, ST, ADDI, CMP, SETF.

use crate::codon::Codon;
use crate::error::Fault;
use crate::io::{Input, Output};

use super::{Fetched, Interpreter};

impl<I: Input, O: Output> Interpreter<I, O> {
    /// `LDI(c)`: `ACC <- c`, the literal parameter codon.
    pub(super) fn alu_ldi(&mut self, f: &Fetched) {
        self.registers.acc_load(f.params[0]);
    }

    /// `LDF`: `ACC <- 1 if FLAG else 0`.
    pub(super) fn alu_ldf(&mut self) {
        let v = if self.registers.flag_get() { 1 } else { 0 };
        self.registers.acc_load(Codon::from_unsigned(v));
    }

    /// `LD(off)`: `ACC <- strand.get(IP + off)`, `off` signed.
    pub(super) fn alu_ld(&mut self, f: &Fetched) -> Result<(), Fault> {
        let target = self.signed_target(f)?;
        let value = self.strand.get(target).ok_or_else(|| self.address_fault(f))?;
        self.registers.acc_load(value);
        Ok(())
    }

    /// `ST(off)`: `strand.set(IP + off, ACC)`, `off` signed.
    pub(super) fn alu_st(&mut self, f: &Fetched) -> Result<(), Fault> {
        let target = self.signed_target(f)?;
        self.strand
            .set(target, self.registers.acc_get())
            .ok_or_else(|| self.address_fault(f))
    }

    /// `ADDI(c)`: `ACC <- (ACC.unsigned + c.signed) mod 64`.
    pub(super) fn alu_addi(&mut self, f: &Fetched) {
        self.registers.acc_add_signed(f.params[0].to_signed());
    }

    /// `CMP(c)`: `FLAG <- ACC == c` by unsigned equality.
    pub(super) fn alu_cmp(&mut self, f: &Fetched) {
        let eq = self.registers.acc_get().to_unsigned() == f.params[0].to_unsigned();
        self.registers.flag_set(eq);
    }

    /// `SETF(c)`: `FLAG <- true` if `c`'s first nucleotide is A or C,
    /// `false` if G or T. Every nucleotide is one of the four, so this
    /// covers every possible `c`.
    pub(super) fn alu_setf(&mut self, f: &Fetched) {
        self.registers.flag_set(f.params[0].first().is_a_or_c());
    }

    /// Resolves a signed offset parameter against `IP`, faulting on a
    /// negative effective index.
    fn signed_target(&self, f: &Fetched) -> Result<usize, Fault> {
        let off = f.params[0].to_signed() as i64;
        let effective = f.ip as i64 + off;
        usize::try_from(effective).map_err(|_| self.address_fault(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{SliceInput, StringOutput};
    use crate::loader::load_str;

    fn vm(src: &str) -> Interpreter<SliceInput, StringOutput> {
        Interpreter::new(load_str(src).unwrap(), SliceInput::new([]), StringOutput::default())
    }

    #[test]
    fn ld_negative_effective_index_is_address_fault() {
        // GAA has signed value -32; at ip=1 that targets index -31.
        let mut v = vm("ATG AAG GAA TGA");
        let err = v.run().unwrap_err();
        assert!(matches!(err, Fault::AddressFault { .. }));
    }

    #[test]
    fn cmp_uses_unsigned_equality() {
        let mut v = vm("ATG ATA AAA TGA");
        v.run().unwrap();
        assert!(v.registers().flag_get());
    }

    #[test]
    fn setf_splits_on_first_nucleotide() {
        let mut v = vm("ATG TAT AAA TGA");
        v.run().unwrap();
        assert!(v.registers().flag_get());

        let mut v = vm("ATG TAT TTT TGA");
        v.run().unwrap();
        assert!(!v.registers().flag_get());
    }

    #[test]
    fn ldf_reads_back_flag_as_codon() {
        let mut v = vm("ATG TAT AAA AGT GTA TGA");
        v.run().unwrap();
        assert_eq!(v.output().as_str(), "B");
    }
}
