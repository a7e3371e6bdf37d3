use super::types::{Error, Located, Mode};
use crate::spec::types::hw::{self, Byte, Word};
use crate::spec::types::schema::{
    Action, Instrument, Mnemonic, Opcode, Operator, Parameter, Prefix, Register,
};
use std::str::FromStr;

/*
    The encoder walks the scanned lines once, threading the translation mode
    through explicitly; there is no other state. The mode decides the line
    grammar (header / instruction / literal), and within instruction mode
    the opcode decides the operand grammar. Two grammars are context
    sensitive on an operand that has already been decoded: CMP's middle
    field switches between register and task address on the operator, and
    MOV's last field switches between register and RAM address on the
    prefix. Both are matched exhaustively so an unhandled discriminant
    cannot encode silently.

    A line that fails leaves one diagnostic and costs no word; translation
    continues with the remaining lines so a run reports everything at once.
*/

pub fn encode(lines: Vec<Located<Vec<&str>>>) -> (Vec<Word>, Vec<Located<Error>>) {
    let mut mode = Mode::Header;
    let mut words = Vec::new();
    let mut errors = Vec::new();

    for line in lines {
        let loc = line.loc();
        let (word, next) = encode_line(mode, line.as_inner());
        mode = next;
        match word {
            Ok(word) => words.push(word),
            Err(err) => errors.push(Located::new(loc, err)),
        }
    }

    (words, errors)
}

/// Translates one line under the given mode, returning the mode for the
/// next line. A malformed line still performs its mode transition: the
/// header slot is consumed by the first non-comment line no matter how it
/// fares, and HLT is recognised from the opcode field alone.
pub fn encode_line(mode: Mode, fields: &[&str]) -> (Result<Word, Error>, Mode) {
    match mode {
        Mode::Header => (encode_header(fields), Mode::Instruction),
        Mode::Instruction => encode_inst(fields),
        Mode::Literal => (encode_literal(fields), Mode::Literal),
    }
}

fn encode_header(fields: &[&str]) -> Result<Word, Error> {
    const FORM: &str = "the header line";

    let group = parse_byte(field(fields, 0, FORM, 4)?, "decimal header byte")?;
    let task = parse_byte(field(fields, 1, FORM, 4)?, "decimal header byte")?;
    let freq = parse_byte(field(fields, 2, FORM, 4)?, "decimal header byte")?;
    let length = parse_byte(field(fields, 3, FORM, 4)?, "decimal header byte")?;

    Ok(hw::pack(group, task, freq, length))
}

fn encode_inst(fields: &[&str]) -> (Result<Word, Error>, Mode) {
    let opcode = match field(fields, 0, "an instruction line", 1).and_then(resolve::<Opcode>) {
        Ok(opcode) => opcode,
        Err(err) => return (Err(err), Mode::Instruction),
    };

    let next = match opcode {
        Opcode::Hlt => Mode::Literal,
        _ => Mode::Instruction,
    };

    (encode_operands(opcode, fields), next)
}

fn encode_operands(opcode: Opcode, fields: &[&str]) -> Result<Word, Error> {
    match opcode {
        // Bare opcodes; the original tool ignores anything after the
        // mnemonic and padded programs rely on that.
        Opcode::Nop | Opcode::Hlt => Ok(hw::pack(opcode.code(), 0, 0, 0)),

        Opcode::Lea => {
            const FORM: &str = "OP_LEA";
            let reg: Register = resolve(field(fields, 1, FORM, 4)?)?;
            let task = parse_address(field(fields, 2, FORM, 4)?)?;
            let addr = parse_address(field(fields, 3, FORM, 4)?)?;
            Ok(hw::pack(opcode.code(), reg.code(), task, addr))
        }

        Opcode::Mov => encode_mov(fields),
        Opcode::Cmp => encode_cmp(fields),

        Opcode::Set | Opcode::Get => {
            const FORM: &str = "OP_SET/OP_GET";
            let inst: Instrument = resolve(field(fields, 1, FORM, 4)?)?;
            let param: Parameter = resolve(field(fields, 2, FORM, 4)?)?;
            let reg: Register = resolve(field(fields, 3, FORM, 4)?)?;
            Ok(hw::pack(opcode.code(), inst.code(), param.code(), reg.code()))
        }

        Opcode::Act => {
            const FORM: &str = "OP_ACT";
            let inst: Instrument = resolve(field(fields, 1, FORM, 4)?)?;
            let action: Action = resolve(field(fields, 2, FORM, 4)?)?;
            let reg: Register = resolve(field(fields, 3, FORM, 4)?)?;
            Ok(hw::pack(opcode.code(), inst.code(), action.code(), reg.code()))
        }

        Opcode::Str => {
            const FORM: &str = "OP_STR";
            let prefix = resolve_scoped::<Prefix>(
                field(fields, 1, FORM, 3)?,
                "STR channel prefix",
                |p| matches!(p, Prefix::StrAlu | Prefix::StrFpu | Prefix::StrBin),
            )?;
            let reg: Register = resolve(field(fields, 2, FORM, 3)?)?;
            // The middle field is forced to zero; the runtime meaning of STR
            // is undocumented upstream, only its encoding is fixed.
            Ok(hw::pack(opcode.code(), prefix.code(), 0, reg.code()))
        }

        Opcode::Fma | Opcode::Fsd | Opcode::Nor => {
            const FORM: &str = "a three-register instruction";
            let a: Register = resolve(field(fields, 1, FORM, 4)?)?;
            let b: Register = resolve(field(fields, 2, FORM, 4)?)?;
            let c: Register = resolve(field(fields, 3, FORM, 4)?)?;
            Ok(hw::pack(opcode.code(), a.code(), b.code(), c.code()))
        }

        Opcode::Sin | Opcode::Cos | Opcode::Tan | Opcode::Pow => {
            const FORM: &str = "a trig/power instruction";
            let prefix = resolve_scoped::<Prefix>(
                field(fields, 1, FORM, 4)?,
                "forward/inverse prefix",
                |p| matches!(p, Prefix::Normal | Prefix::Invert),
            )?;
            let a: Register = resolve(field(fields, 2, FORM, 4)?)?;
            let b: Register = resolve(field(fields, 3, FORM, 4)?)?;
            Ok(hw::pack(opcode.code(), prefix.code(), a.code(), b.code()))
        }
    }
}

fn encode_mov(fields: &[&str]) -> Result<Word, Error> {
    const FORM: &str = "OP_MOV";

    let prefix = resolve_scoped::<Prefix>(
        field(fields, 1, FORM, 4)?,
        "MOV addressing prefix",
        |p| matches!(p, Prefix::MovReg | Prefix::MovRam | Prefix::MovInd),
    )?;
    let src: Register = resolve(field(fields, 2, FORM, 4)?)?;
    let dest = field(fields, 3, FORM, 4)?;

    // The destination field only means something once the addressing mode
    // is known: the same token text encodes differently under REG and RAM
    // modes. Indirect mode is declared in the prefix namespace but no
    // grammar for its destination was ever specified upstream.
    let dest = match prefix {
        Prefix::MovReg => resolve::<Register>(dest)?.code(),
        Prefix::MovRam => parse_address(dest)?,
        Prefix::MovInd => {
            return Err(Error::UndefinedGrammar("indirect addressing (PRE_MOV_IND)"))
        }
        _ => unreachable!(),
    };

    Ok(hw::pack(Opcode::Mov.code(), prefix.code(), src.code(), dest))
}

fn encode_cmp(fields: &[&str]) -> Result<Word, Error> {
    const FORM: &str = "OP_CMP";

    let operator: Operator = resolve(field(fields, 1, FORM, 4)?)?;
    let middle = field(fields, 2, FORM, 4)?;
    let reg: Register = resolve(field(fields, 3, FORM, 4)?)?;

    // Selected by operator identity, not by opcode: the task-status
    // operators compare against a task slot, so the middle operand is a
    // small decimal address rather than a register.
    let middle = if operator.is_task_status() {
        parse_address(middle)?
    } else {
        resolve::<Register>(middle)?.code()
    };

    Ok(hw::pack(Opcode::Cmp.code(), operator.code(), middle, reg.code()))
}

fn encode_literal(fields: &[&str]) -> Result<Word, Error> {
    parse_literal(field(fields, 0, "a literal line", 1)?)
}

fn field<'a>(
    fields: &[&'a str],
    idx: usize,
    form: &'static str,
    expected: usize,
) -> Result<&'a str, Error> {
    fields.get(idx).copied().ok_or(Error::OperandCount {
        form,
        expected,
        found: fields.len(),
    })
}

fn resolve<T: Mnemonic>(token: &str) -> Result<T, Error> {
    T::from_str(token).map_err(|_| Error::UnknownSymbol {
        what: T::NAMESPACE,
        token: token.to_owned(),
    })
}

/// Resolves in the full namespace, then narrows to the subset the grammar
/// position accepts; a mnemonic from the wrong family reads as unknown in
/// that position.
fn resolve_scoped<T: Mnemonic>(
    token: &str,
    what: &'static str,
    accepts: impl Fn(T) -> bool,
) -> Result<T, Error> {
    match T::from_str(token) {
        Ok(value) if accepts(value) => Ok(value),
        _ => Err(Error::UnknownSymbol {
            what,
            token: token.to_owned(),
        }),
    }
}

/// Decimal text to a byte, truncating to the low 8 bits. The source format
/// performs no range validation beyond what the packing implies; a signed
/// value keeps its two's-complement byte pattern.
fn parse_byte(token: &str, expected: &'static str) -> Result<Byte, Error> {
    token
        .parse::<i32>()
        .map(|v| v as Byte)
        .map_err(|_| Error::MalformedNumber {
            token: token.to_owned(),
            expected,
        })
}

fn parse_address(token: &str) -> Result<Byte, Error> {
    parse_byte(token, "decimal address")
}

/// A literal line is one token with a one-character type tag: `i` for a
/// base-10 signed integer, `f` for an IEEE-754 single. Either way the raw
/// bit pattern becomes the word.
fn parse_literal(token: &str) -> Result<Word, Error> {
    let malformed = || Error::MalformedNumber {
        token: token.to_owned(),
        expected: "'i' or 'f' tagged literal",
    };

    let tag = token.chars().last().ok_or_else(malformed)?;
    let value = &token[..token.len() - tag.len_utf8()];

    match tag {
        'i' => value
            .parse::<i32>()
            .map(|v| v as Word)
            .map_err(|_| malformed()),
        'f' => value.parse::<f32>().map(f32::to_bits).map_err(|_| malformed()),
        _ => Err(malformed()),
    }
}
