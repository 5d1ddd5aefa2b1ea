//! Maps opcode codons to instruction kinds, parameter arity, and offset
//! signedness.
//!
//! The decode table is exhaustive over the 64 possible codon values:
//! every codon not listed below decodes to [`Kind::Unknown`], which the
//! interpreter turns into [`crate::error::Fault::UnknownOpcode`].

use crate::codon::Codon;

/// Whether an instruction's offset parameter(s) are read as unsigned
/// `[0, 63]` self-modification offsets or signed `[-32, 31]` memory
/// offsets. Instructions with no offset parameter (e.g. immediates)
/// are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetSign {
    Unsigned,
    Signed,
    None,
}

/// One entry of the opcode table. `Debug` is implemented by hand in
/// `disasm.rs` to render the short mnemonic form (`"MUT"` rather than
/// `"Mut"`), shared between disassembly and tracing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Start,
    Stop,
    Mut,
    Del,
    Ins,
    Dup,
    Trp,
    Rev,
    Ldi,
    Ldf,
    Ld,
    St,
    Addi,
    Cmp,
    Setf,
    Out,
    In,
    /// Opcode codon not present in the table.
    Unknown,
}

impl Kind {
    /// Number of parameter codons this instruction consumes.
    pub const fn arity(self) -> usize {
        match self {
            Kind::Start | Kind::Stop | Kind::Ldf | Kind::Out | Kind::In | Kind::Unknown => 0,
            Kind::Del | Kind::Ldi | Kind::Ld | Kind::St | Kind::Addi | Kind::Cmp | Kind::Setf => 1,
            Kind::Mut | Kind::Ins | Kind::Dup | Kind::Rev => 2,
            Kind::Trp => 3,
        }
    }

    /// How this instruction's offset-bearing parameter(s) should be
    /// interpreted. For instructions with more than one offset
    /// parameter (e.g. `TRP`), all of its offset parameters share this
    /// signedness; immediates (`LDI`, `ADDI`'s literal, etc.) are
    /// interpreted directly rather than as an offset and report `None`.
    pub const fn offset_sign(self) -> OffsetSign {
        match self {
            Kind::Mut | Kind::Del | Kind::Ins | Kind::Dup | Kind::Trp | Kind::Rev => OffsetSign::Unsigned,
            Kind::Ld | Kind::St => OffsetSign::Signed,
            _ => OffsetSign::None,
        }
    }
}

/// Decode an opcode codon into its instruction kind.
pub fn decode(op: Codon) -> Kind {
    match op.to_char().as_str() {
        "ATG" => Kind::Start,
        "TGA" => Kind::Stop,
        "CAG" => Kind::Mut,
        "CTT" => Kind::Del,
        "CTA" => Kind::Ins,
        "CCA" => Kind::Dup,
        "CCG" => Kind::Trp,
        "CCC" => Kind::Rev,
        "AAA" => Kind::Ldi,
        "AGT" => Kind::Ldf,
        "AAG" => Kind::Ld,
        "AAC" => Kind::St,
        "AAT" => Kind::Addi,
        "ATA" => Kind::Cmp,
        "TAT" => Kind::Setf,
        "GTA" => Kind::Out,
        "GAT" => Kind::In,
        _ => Kind::Unknown,
    }
}
