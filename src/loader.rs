//! Source text -> [`Strand`].
//!
//! Only `A`, `C`, `G`, `T` (either case) are significant; everything
//! else is ignored, conventionally whitespace and comments. Significant
//! characters must group into triples.

use std::io::{self, Read};

use itertools::Itertools;

use crate::codon::Codon;
use crate::error::ParseError;
use crate::strand::Strand;

/// Parse a complete in-memory source string into a [`Strand`].
pub fn load_str(source: &str) -> Result<Strand, ParseError> {
    let significant: Vec<char> = source.chars().filter(|c| is_nucleotide_char(*c)).collect();

    if significant.len() % 3 != 0 {
        return Err(ParseError::TrailingCodon(significant.len() % 3));
    }

    let codons = significant
        .into_iter()
        .tuples()
        .map(|(a, b, c)| Codon::from_chars(a, b, c))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(codons = codons.len(), "loaded strand from source text");
    Ok(Strand::new(codons))
}

/// Parse source text from any [`Read`] implementation (e.g. a file),
/// for the CLI front-end.
pub fn load_reader<R: Read>(mut reader: R) -> io::Result<Result<Strand, ParseError>> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(load_str(&buf))
}

fn is_nucleotide_char(c: char) -> bool {
    matches!(c, 'A' | 'C' | 'G' | 'T' | 'a' | 'c' | 'g' | 't')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_whitespace_and_comments() {
        // "blip blorp" deliberately avoids A/C/G/T so every character in
        // the comment is insignificant, not just the whitespace around it.
        let strand = load_str("ATG -- blip blorp\n TGA").unwrap();
        assert_eq!(strand.len(), 2);
    }

    #[test]
    fn is_case_insensitive() {
        let strand = load_str("atg TGA").unwrap();
        assert_eq!(strand.len(), 2);
    }

    #[test]
    fn trailing_codon_is_parse_error() {
        assert_eq!(load_str("ATGA"), Err(ParseError::TrailingCodon(1)));
        assert_eq!(load_str("AT"), Err(ParseError::TrailingCodon(2)));
    }

    #[test]
    fn preserves_order() {
        let strand = load_str("ATGTGA").unwrap();
        assert_eq!(strand.get(0).unwrap().to_char(), "ATG");
        assert_eq!(strand.get(1).unwrap().to_char(), "TGA");
    }
}
