//! Runtime interpreter error implementation.
//!
//! Every error kind here is fatal to the run: Helix programs have no
//! way to catch a fault, so [`Fault`] is the single type the driver
//! loop propagates with `?` up to the embedder.

use thiserror::Error;

use crate::codon::Codon;

/// A parameter snapshot captured before an instruction's effect runs,
/// for use in fault diagnostics. Parameters are snapshotted so a
/// self-overwriting instruction's fault still reports the values it
/// actually read.
pub type ParamSnapshot = Vec<Codon>;

/// Fatal interpreter error variants, carrying `{ip, opcode, parameters,
/// strand_len}` diagnostic context wherever it's available.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Fault {
    /// A codon index was out of range (negative, or `>= len`) during a
    /// read, write, insert, delete, or block operation.
    #[error("address fault at ip={ip} opcode={opcode:?} params={parameters:?} (strand len {strand_len})")]
    AddressFault {
        ip: usize,
        opcode: Codon,
        parameters: ParamSnapshot,
        strand_len: usize,
    },

    /// The opcode codon at `ip` is not in the decode table.
    #[error("unknown opcode {opcode:?} at ip={ip} (strand len {strand_len})")]
    UnknownOpcode {
        ip: usize,
        opcode: Codon,
        strand_len: usize,
    },

    /// `IN` failed: input exhausted or out of range.
    #[error("io fault at ip={ip} opcode={opcode:?} params={parameters:?}: {reason}")]
    IoFault {
        ip: usize,
        opcode: Codon,
        parameters: ParamSnapshot,
        strand_len: usize,
        reason: IoFaultReason,
    },

    /// `OUT` was asked to print a value outside the defined character
    /// range. `ACC`'s width isn't enforced at the type level, so this
    /// stays reachable rather than assumed away.
    #[error("domain fault at ip={ip} opcode={opcode:?}: value {value} has no printable character")]
    DomainFault {
        ip: usize,
        opcode: Codon,
        parameters: ParamSnapshot,
        strand_len: usize,
        value: u8,
    },

    /// The optional instruction-count ceiling was exceeded.
    #[error("instruction budget exhausted after {steps} steps (ip={ip})")]
    BudgetExhausted { ip: usize, steps: u64 },

    /// Propagated from the loader: malformed source text.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

impl Fault {
    /// The instruction pointer active when the fault was raised, if any.
    pub const fn ip(&self) -> Option<usize> {
        match self {
            Fault::AddressFault { ip, .. }
            | Fault::UnknownOpcode { ip, .. }
            | Fault::IoFault { ip, .. }
            | Fault::DomainFault { ip, .. }
            | Fault::BudgetExhausted { ip, .. } => Some(*ip),
            Fault::ParseError(_) => None,
        }
    }
}

/// Why an `IN` instruction failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IoFaultReason {
    #[error("input exhausted")]
    InputExhausted,
    #[error("input value {0} outside [0, 63]")]
    InputOutOfRange(u8),
}

/// Malformed Helix source text: only groups of 3 significant characters
/// are valid; 1 or 2 trailing significant characters is an error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("'{0}' is not one of A/C/G/T")]
    NotANucleotide(char),
    #[error("source ends with {0} leftover significant character(s), not a multiple of 3")]
    TrailingCodon(usize),
}

/// A successful termination. Both are a "halt", but the host may care
/// which one happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// `STOP` (`TGA`) executed.
    Stop,
    /// The instruction pointer ran past the end of the strand.
    OutOfBounds,
    /// The strand contained no `ATG`; the program never started.
    NoStart,
}
