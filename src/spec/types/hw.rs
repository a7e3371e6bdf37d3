use itertools::Itertools;
use static_assertions::const_assert;

pub type Byte = u8;
pub type Word = u32;

pub const BYTE_WIDTH: u32 = 8;
pub const FIELD_COUNT: usize = 4;
pub const FIELD_MASK: Word = 0xFF;

const_assert!(FIELD_MASK == (1u32 << BYTE_WIDTH) - 1);

/*
    An instruction word is four 8-bit fields packed most-significant-first:

        FFFFFFFF GGGGGGGG HHHHHHHH IIIIIIII
          f0        f1       f2       f3

    In the header line the fields are (group, task, frequency, length); in an
    instruction line f0 is the opcode and the meaning of f1..f3 depends on
    the opcode's grammar. Each field must be masked to its unsigned low 8
    bits before shifting: a field which arrived as a signed byte would
    otherwise sign-extend and corrupt every field above it.
*/

pub const fn pack(f0: Byte, f1: Byte, f2: Byte, f3: Byte) -> Word {
    ((f0 as Word & FIELD_MASK) << (3 * BYTE_WIDTH))
        | ((f1 as Word & FIELD_MASK) << (2 * BYTE_WIDTH))
        | ((f2 as Word & FIELD_MASK) << BYTE_WIDTH)
        | (f3 as Word & FIELD_MASK)
}

pub const fn unpack(word: Word) -> (Byte, Byte, Byte, Byte) {
    (
        ((word >> (3 * BYTE_WIDTH)) & FIELD_MASK) as Byte,
        ((word >> (2 * BYTE_WIDTH)) & FIELD_MASK) as Byte,
        ((word >> BYTE_WIDTH) & FIELD_MASK) as Byte,
        (word & FIELD_MASK) as Byte,
    )
}

/// Renders a program as the wire text format: lowercase hex, no leading
/// zeros, one word per source line, single-comma joined.
pub fn emit_hex(words: &[Word]) -> String {
    words.iter().map(|w| format!("{:x}", w)).join(",")
}
