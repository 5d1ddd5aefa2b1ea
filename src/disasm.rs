//! Best-effort textual disassembly of a [`Strand`], using the same
//! decode table the interpreter does. Not part of the core VM; a small
//! debugging collaborator for inspecting a strand without running it.

use std::fmt::Write as _;

use crate::decoder::{decode, Kind};
use crate::strand::Strand;

/// Render one line per decoded instruction: its index, opcode codon,
/// kind, and any parameter codons. Parameters that run off the end of
/// the strand (a truncated final instruction) are rendered as `?`
/// rather than erroring — this is a dump, not an execution.
pub fn disassemble(strand: &Strand) -> String {
    let mut out = String::new();
    let mut i = 0;
    while i < strand.len() {
        let opcode = strand.get(i).expect("i < len");
        let kind = decode(opcode);
        let arity = kind.arity();

        let _ = write!(out, "{i:>5}: {opcode} {kind:?}");
        for j in 1..=arity {
            match strand.get(i + j) {
                Some(p) => {
                    let _ = write!(out, " {p}");
                }
                None => {
                    let _ = write!(out, " ?");
                }
            }
        }
        out.push('\n');

        i += 1 + arity;
    }
    out
}

impl std::fmt::Debug for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Kind::Start => "START",
            Kind::Stop => "STOP",
            Kind::Mut => "MUT",
            Kind::Del => "DEL",
            Kind::Ins => "INS",
            Kind::Dup => "DUP",
            Kind::Trp => "TRP",
            Kind::Rev => "REV",
            Kind::Ldi => "LDI",
            Kind::Ldf => "LDF",
            Kind::Ld => "LD",
            Kind::St => "ST",
            Kind::Addi => "ADDI",
            Kind::Cmp => "CMP",
            Kind::Setf => "SETF",
            Kind::Out => "OUT",
            Kind::In => "IN",
            Kind::Unknown => "???",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_str;

    #[test]
    fn disassembles_each_instruction_on_its_own_line() {
        // START, LDI, OUT, STOP: four decoded instructions, one line each.
        let strand = load_str("ATG AAA AAA GTA TGA").unwrap();
        let text = disassemble(&strand);
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("START"));
        assert!(text.contains("LDI"));
        assert!(text.contains("OUT"));
        assert!(text.contains("STOP"));
    }
}
