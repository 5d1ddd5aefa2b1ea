//! The mutable, self-referential codon buffer: program and data at once.

use crate::codon::Codon;

/// The ordered, 0-indexed sequence of codons that is simultaneously the
/// executing program and its own data.
///
/// `Strand` is the sole process-wide mutable structure of variable
/// size; for the duration of a run it is owned exclusively by the
/// [`crate::interpreter::Interpreter`]. Every mutating operation here
/// reports an out-of-range access as `None` rather than panicking —
/// callers (the interpreter) turn that into an
/// [`AddressFault`](crate::error::Fault::AddressFault) with the
/// diagnostic context it needs.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Strand {
    codons: Vec<Codon>,
}

impl Strand {
    /// Builds a strand from an already-decoded codon sequence.
    pub fn new(codons: Vec<Codon>) -> Self {
        Self { codons }
    }

    pub fn len(&self) -> usize {
        self.codons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Codon> {
        self.codons.get(i).copied()
    }

    /// Overwrite position `i`. `None` if out of range.
    pub fn set(&mut self, i: usize, c: Codon) -> Option<()> {
        let slot = self.codons.get_mut(i)?;
        *slot = c;
        Some(())
    }

    /// Insert `c` before position `i`; `i == len()` appends.
    pub fn insert(&mut self, i: usize, c: Codon) -> Option<()> {
        if i > self.codons.len() {
            return None;
        }
        self.codons.insert(i, c);
        Some(())
    }

    /// Remove the codon at position `i`.
    pub fn delete(&mut self, i: usize) -> Option<Codon> {
        if i >= self.codons.len() {
            return None;
        }
        Some(self.codons.remove(i))
    }

    /// Owned copy of `len` codons starting at `start`.
    pub fn copy_range(&self, start: usize, len: usize) -> Option<Vec<Codon>> {
        let end = start.checked_add(len)?;
        self.codons.get(start..end).map(|s| s.to_vec())
    }

    /// Insert `seq` before position `at`, preserving order, as a
    /// single logical operation (equivalent to repeated `insert` but
    /// without re-validating bounds between elements).
    pub fn splice(&mut self, at: usize, seq: &[Codon]) -> Option<()> {
        if at > self.codons.len() {
            return None;
        }
        self.codons.splice(at..at, seq.iter().copied());
        Some(())
    }

    /// Reverse the block `[start, start+len)` in place.
    pub fn reverse_range(&mut self, start: usize, len: usize) -> Option<()> {
        let end = start.checked_add(len)?;
        let slice = self.codons.get_mut(start..end)?;
        slice.reverse();
        Some(())
    }

    /// Index of the first `ATG` codon, scanning left to right.
    pub fn find_start(&self, atg: Codon) -> Option<usize> {
        self.codons.iter().position(|&c| c == atg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(u: u8) -> Codon {
        Codon::from_unsigned(u)
    }

    #[test]
    fn insert_shifts_subsequent_indices() {
        let mut s = Strand::new(vec![c(0), c(1), c(2)]);
        s.insert(1, c(9)).unwrap();
        assert_eq!(s.get(1), Some(c(9)));
        assert_eq!(s.get(2), Some(c(1)));
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut s = Strand::new(vec![c(0)]);
        assert!(s.insert(1, c(5)).is_some());
        assert_eq!(s.get(1), Some(c(5)));
    }

    #[test]
    fn insert_past_len_is_address_fault() {
        let mut s = Strand::new(vec![c(0)]);
        assert!(s.insert(2, c(5)).is_none());
    }

    #[test]
    fn delete_shifts_subsequent_indices() {
        let mut s = Strand::new(vec![c(0), c(1), c(2)]);
        assert_eq!(s.delete(0), Some(c(0)));
        assert_eq!(s.get(0), Some(c(1)));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn copy_range_overrun_is_none() {
        let s = Strand::new(vec![c(0), c(1)]);
        assert!(s.copy_range(1, 5).is_none());
        assert_eq!(s.copy_range(0, 2), Some(vec![c(0), c(1)]));
    }

    #[test]
    fn splice_preserves_order() {
        let mut s = Strand::new(vec![c(0), c(3)]);
        s.splice(1, &[c(1), c(2)]).unwrap();
        assert_eq!(
            (0..s.len()).map(|i| s.get(i).unwrap().to_unsigned()).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn reverse_range_is_involution() {
        let mut s = Strand::new(vec![c(0), c(1), c(2), c(3)]);
        let before = s.clone();
        s.reverse_range(0, 3).unwrap();
        s.reverse_range(0, 3).unwrap();
        assert_eq!(
            (0..s.len()).map(|i| s.get(i).unwrap().to_unsigned()).collect::<Vec<_>>(),
            (0..before.len()).map(|i| before.get(i).unwrap().to_unsigned()).collect::<Vec<_>>()
        );
    }
}
