//! The two I/O primitives: OUT and IN.

use crate::codon::Codon;
use crate::error::Fault;
use crate::io::{value_to_char, Input, Output};

use super::{Fetched, Interpreter};

impl<I: Input, O: Output> Interpreter<I, O> {
    /// `OUT`: write the character for `ACC`'s unsigned value.
    pub(super) fn io_out(&mut self, f: &Fetched) -> Result<(), Fault> {
        let value = self.registers.acc_get().to_unsigned();
        let c = value_to_char(value).ok_or_else(|| Fault::DomainFault {
            ip: f.ip,
            opcode: f.opcode,
            parameters: f.params.clone(),
            strand_len: self.strand.len(),
            value,
        })?;
        self.output.output_write(c);
        Ok(())
    }

    /// `IN`: read one value from the input port into `ACC`.
    pub(super) fn io_in(&mut self, f: &Fetched) -> Result<(), Fault> {
        let v = self.input.input_read().map_err(|reason| Fault::IoFault {
            ip: f.ip,
            opcode: f.opcode,
            parameters: f.params.clone(),
            strand_len: self.strand.len(),
            reason,
        })?;
        self.registers.acc_load(Codon::from_unsigned(v));
        Ok(())
    }
}
