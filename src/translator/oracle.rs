//! Round-trip oracle for the emitted hex format: decodes a comma-joined
//! hex line back into words and reports per-position disagreement against
//! a reference sequence. Not part of translation; the tests use it to pin
//! `decode(emit(pack(..)))` down to the original fields.

use crate::common;
use crate::spec::types::hw::{self, Word};
use crate::spec::types::schema::Opcode;
use derive_more::Constructor;
use itertools::{EitherOrBoth, Itertools};
use num_traits::FromPrimitive;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MalformedHex(String),
}

pub fn decode_hex(line: &str) -> Result<Vec<Word>, Error> {
    common::split_fields(line)
        .map(|tok| Word::from_str_radix(tok, 16).map_err(|_| Error::MalformedHex(tok.to_owned())))
        .collect()
}

/// A position where the decoded line and the reference disagree; `None` on
/// either side means that sequence had already run out.
#[derive(Debug, PartialEq, Eq, Constructor)]
pub struct Mismatch {
    pub index: usize,
    pub decoded: Option<Word>,
    pub expected: Option<Word>,
}

pub fn verify(line: &str, expected: &[Word]) -> Result<Vec<Mismatch>, Error> {
    let decoded = decode_hex(line)?;

    Ok(decoded
        .into_iter()
        .zip_longest(expected.iter().copied())
        .enumerate()
        .filter_map(|(index, pair)| match pair {
            EitherOrBoth::Both(d, e) if d == e => None,
            EitherOrBoth::Both(d, e) => Some(Mismatch::new(index, Some(d), Some(e))),
            EitherOrBoth::Left(d) => Some(Mismatch::new(index, Some(d), None)),
            EitherOrBoth::Right(e) => Some(Mismatch::new(index, None, Some(e))),
        })
        .collect())
}

/// Recovers the opcode carried in field 0 of a packed word, if that byte
/// names one.
pub fn opcode_of(word: Word) -> Option<Opcode> {
    let (f0, _, _, _) = hw::unpack(word);
    Opcode::from_u8(f0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_comma_joined_hex() {
        assert_eq!(
            decode_hex("1023c05,7000000,3fc00000"),
            Ok(vec![0x01023C05, 0x07000000, 0x3FC00000])
        );
        assert_eq!(
            decode_hex("xyz"),
            Err(Error::MalformedHex("xyz".to_owned()))
        );
    }

    #[test]
    fn verify_reports_only_disagreeing_positions() {
        assert_eq!(verify("1,2,3", &[1, 2, 3]), Ok(vec![]));
        assert_eq!(
            verify("1,2", &[1, 5, 9]),
            Ok(vec![
                Mismatch::new(1, Some(2), Some(5)),
                Mismatch::new(2, None, Some(9)),
            ])
        );
        assert_eq!(
            verify("1,2,3", &[1, 2]),
            Ok(vec![Mismatch::new(2, Some(3), None)])
        );
    }

    #[test]
    fn opcode_of_reads_the_top_field() {
        assert_eq!(opcode_of(0x07000000), Some(Opcode::Hlt));
        assert_eq!(opcode_of(0x0B011011), Some(Opcode::Sin));
        assert_eq!(opcode_of(0xFF000000), None);
    }
}
