//! The self-modification instruction class: MUT, DEL, INS, DUP, TRP, REV.
//!
//! All six offsets here are unsigned and computed from the *opcode*
//! codon's position, never from a parameter's own position. Each
//! effect that changes the strand's length recomputes `next_ip` with
//! [`next_ip_after_delete`]/[`next_ip_after_insert`] so execution
//! always resumes immediately past the (possibly shifted) instruction.

use crate::error::Fault;
use crate::io::{Input, Output};

use super::{Fetched, Interpreter};

/// How a deletion of `len` codons starting at `start` shifts a
/// previously-computed `next_ip`.
fn next_ip_after_delete(next_ip: usize, start: usize, len: usize) -> usize {
    if start >= next_ip {
        return next_ip;
    }
    let overlap = (start + len).min(next_ip) - start;
    next_ip - overlap
}

/// How an insertion of `len` codons at `at` shifts a previously-computed
/// `next_ip`.
fn next_ip_after_insert(next_ip: usize, at: usize, len: usize) -> usize {
    if at <= next_ip {
        next_ip + len
    } else {
        next_ip
    }
}

impl<I: Input, O: Output> Interpreter<I, O> {
    /// `MUT(off, new)`: `strand.set(IP + off, new)`.
    pub(super) fn selfmod_mut(&mut self, f: &Fetched) -> Result<(), Fault> {
        let off = f.params[0].to_unsigned() as usize;
        let target = f.ip + off;
        self.strand.set(target, f.params[1]).ok_or_else(|| self.address_fault(f))
    }

    /// `DEL(off)`: `strand.delete(IP + off)`.
    pub(super) fn selfmod_del(&mut self, f: &Fetched, next_ip: &mut usize) -> Result<(), Fault> {
        let off = f.params[0].to_unsigned() as usize;
        let target = f.ip + off;
        self.strand.delete(target).ok_or_else(|| self.address_fault(f))?;
        *next_ip = next_ip_after_delete(*next_ip, target, 1);
        Ok(())
    }

    /// `INS(off, codon)`: `strand.insert(IP + off, codon)`.
    pub(super) fn selfmod_ins(&mut self, f: &Fetched, next_ip: &mut usize) -> Result<(), Fault> {
        let off = f.params[0].to_unsigned() as usize;
        let target = f.ip + off;
        self.strand.insert(target, f.params[1]).ok_or_else(|| self.address_fault(f))?;
        *next_ip = next_ip_after_insert(*next_ip, target, 1);
        Ok(())
    }

    /// `DUP(start_off, length)`: duplicate `strand[s..s+n]` immediately
    /// after itself.
    pub(super) fn selfmod_dup(&mut self, f: &Fetched, next_ip: &mut usize) -> Result<(), Fault> {
        let s = f.ip + f.params[0].to_unsigned() as usize;
        let n = f.params[1].to_unsigned() as usize;
        let block = self.strand.copy_range(s, n).ok_or_else(|| self.address_fault(f))?;
        self.strand.splice(s + n, &block).ok_or_else(|| self.address_fault(f))?;
        *next_ip = next_ip_after_insert(*next_ip, s + n, n);
        Ok(())
    }

    /// `TRP(src_off, length, dst_off)`: cut `strand[s..s+n]` and
    /// re-insert it before `d' = d` if `d <= s` else `d - n`.
    pub(super) fn selfmod_trp(&mut self, f: &Fetched, next_ip: &mut usize) -> Result<(), Fault> {
        let s = f.ip + f.params[0].to_unsigned() as usize;
        let n = f.params[1].to_unsigned() as usize;
        let d = f.ip + f.params[2].to_unsigned() as usize;

        let block = self.strand.copy_range(s, n).ok_or_else(|| self.address_fault(f))?;
        for _ in 0..n {
            self.strand.delete(s).ok_or_else(|| self.address_fault(f))?;
        }
        *next_ip = next_ip_after_delete(*next_ip, s, n);

        let d_prime = if d <= s {
            d
        } else {
            d.checked_sub(n).ok_or_else(|| self.address_fault(f))?
        };
        self.strand
            .splice(d_prime, &block)
            .ok_or_else(|| self.address_fault(f))?;
        *next_ip = next_ip_after_insert(*next_ip, d_prime, n);
        Ok(())
    }

    /// `REV(start_off, length)`: reverse `strand[IP+start_off ..
    /// IP+start_off+length)` in place. Size-preserving, so `next_ip`
    /// needs no adjustment.
    pub(super) fn selfmod_rev(&mut self, f: &Fetched) -> Result<(), Fault> {
        let start = f.ip + f.params[0].to_unsigned() as usize;
        let len = f.params[1].to_unsigned() as usize;
        self.strand.reverse_range(start, len).ok_or_else(|| self.address_fault(f))
    }
}
