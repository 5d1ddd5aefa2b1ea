//! The fetch/execute loop: advances the instruction pointer, resolves
//! parameters, applies each instruction's effect, and terminates on
//! halt or fault.

mod alu;
mod io_ops;
mod selfmod;

use tracing::{debug, info, trace};

use crate::codon::Codon;
use crate::decoder::{decode, Kind};
use crate::error::{Fault, HaltReason, ParamSnapshot};
use crate::io::{Input, Output};
use crate::registers::Registers;
use crate::strand::Strand;

/// Everything fetched for one instruction before any effect runs: the
/// opcode position, its decoded kind, and its parameters snapshotted
/// from the strand. Snapshotting here (rather than re-reading the
/// strand mid-effect) is what makes an instruction that overwrites its
/// own parameters still observe the values it originally fetched.
struct Fetched {
    ip: usize,
    opcode: Codon,
    kind: Kind,
    params: ParamSnapshot,
    /// `IP + 1 + arity`, before any self-modification adjustment.
    next_ip: usize,
}

/// The Helix virtual machine: one `Strand` plus two registers plus a
/// pair of I/O ports, advanced one instruction at a time.
///
/// Owns its `Strand`, `Registers`, and I/O ports exclusively for the
/// duration of a run — there is no shared mutable state to hand off to
/// another thread.
pub struct Interpreter<I, O> {
    strand: Strand,
    registers: Registers,
    ip: usize,
    input: I,
    output: O,
    budget: Option<u64>,
    steps: u64,
}

impl<I: Input, O: Output> Interpreter<I, O> {
    /// Build an interpreter over `strand`, wiring the given input/output ports.
    pub fn new(strand: Strand, input: I, output: O) -> Self {
        Self {
            strand,
            registers: Registers::default(),
            ip: 0,
            input,
            output,
            budget: None,
            steps: 0,
        }
    }

    /// Impose an instruction-count ceiling; exceeding it halts the run
    /// with [`Fault::BudgetExhausted`].
    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn strand(&self) -> &Strand {
        &self.strand
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn ip(&self) -> usize {
        self.ip
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Scan for the first `ATG` and position `IP` immediately after it.
    /// Returns `false` (and leaves the interpreter ready to report
    /// [`HaltReason::NoStart`]) if no `ATG` exists.
    fn locate_start(&mut self) -> bool {
        let atg = decoder_start_codon();
        match self.strand.find_start(atg) {
            Some(idx) => {
                self.ip = idx + 1;
                true
            }
            None => false,
        }
    }

    /// Run to completion: either a successful halt or the first fault.
    pub fn run(&mut self) -> Result<HaltReason, Fault> {
        if !self.locate_start() {
            info!("no ATG codon found; halting with no program run");
            return Ok(HaltReason::NoStart);
        }

        loop {
            if let Some(reason) = self.step()? {
                info!(ip = self.ip, steps = self.steps, ?reason, "halted");
                return Ok(reason);
            }
        }
    }

    /// Execute a single instruction. `Ok(Some(_))` means the run has
    /// terminated; `Ok(None)` means keep stepping.
    fn step(&mut self) -> Result<Option<HaltReason>, Fault> {
        if self.ip >= self.strand.len() {
            return Ok(Some(HaltReason::OutOfBounds));
        }

        if let Some(budget) = self.budget {
            if self.steps >= budget {
                return Err(Fault::BudgetExhausted {
                    ip: self.ip,
                    steps: self.steps,
                });
            }
        }

        let fetched = self.fetch()?;
        trace!(ip = fetched.ip, opcode = %fetched.opcode, kind = ?fetched.kind, "fetched instruction");
        self.steps += 1;

        let mut next_ip = fetched.next_ip;
        let halted = self.apply(&fetched, &mut next_ip)?;

        match halted {
            Some(reason) => Ok(Some(reason)),
            None => {
                self.ip = next_ip;
                Ok(None)
            }
        }
    }

    fn fetch(&self) -> Result<Fetched, Fault> {
        let ip = self.ip;
        let opcode = self.strand.get(ip).expect("checked by step() caller");
        let kind = decode(opcode);
        let arity = kind.arity();

        let mut params = Vec::with_capacity(arity);
        for j in 1..=arity {
            let idx = ip + j;
            let p = self.strand.get(idx).ok_or_else(|| Fault::AddressFault {
                ip,
                opcode,
                parameters: params.clone(),
                strand_len: self.strand.len(),
            })?;
            params.push(p);
        }

        Ok(Fetched {
            ip,
            opcode,
            kind,
            next_ip: ip + 1 + arity,
            params,
        })
    }

    fn address_fault(&self, fetched: &Fetched) -> Fault {
        Fault::AddressFault {
            ip: fetched.ip,
            opcode: fetched.opcode,
            parameters: fetched.params.clone(),
            strand_len: self.strand.len(),
        }
    }

    /// Dispatch a fetched instruction to its effect. Returns
    /// `Some(reason)` if this instruction halts the run.
    fn apply(&mut self, fetched: &Fetched, next_ip: &mut usize) -> Result<Option<HaltReason>, Fault> {
        match fetched.kind {
            Kind::Start => {
                debug!("START encountered mid-program, treated as no-op");
                Ok(None)
            }
            Kind::Stop => Ok(Some(HaltReason::Stop)),
            Kind::Mut => self.selfmod_mut(fetched).map(|_| None),
            Kind::Del => self.selfmod_del(fetched, next_ip).map(|_| None),
            Kind::Ins => self.selfmod_ins(fetched, next_ip).map(|_| None),
            Kind::Dup => self.selfmod_dup(fetched, next_ip).map(|_| None),
            Kind::Trp => self.selfmod_trp(fetched, next_ip).map(|_| None),
            Kind::Rev => self.selfmod_rev(fetched).map(|_| None),
            Kind::Ldi => {
                self.alu_ldi(fetched);
                Ok(None)
            }
            Kind::Ldf => {
                self.alu_ldf();
                Ok(None)
            }
            Kind::Ld => self.alu_ld(fetched).map(|_| None),
            Kind::St => self.alu_st(fetched).map(|_| None),
            Kind::Addi => {
                self.alu_addi(fetched);
                Ok(None)
            }
            Kind::Cmp => {
                self.alu_cmp(fetched);
                Ok(None)
            }
            Kind::Setf => {
                self.alu_setf(fetched);
                Ok(None)
            }
            Kind::Out => self.io_out(fetched).map(|_| None),
            Kind::In => self.io_in(fetched).map(|_| None),
            Kind::Unknown => Err(Fault::UnknownOpcode {
                ip: fetched.ip,
                opcode: fetched.opcode,
                strand_len: self.strand.len(),
            }),
        }
    }
}

fn decoder_start_codon() -> Codon {
    Codon::from_chars('A', 'T', 'G').expect("ATG is a valid codon")
}
