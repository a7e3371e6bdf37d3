use splasm::assets;
use splasm::spec::types::hw;
use splasm::spec::types::schema::Opcode;
use splasm::translator::{self, oracle, Error};

#[test]
fn demo_program_translates_cleanly() {
    let hex = translator::translate_hex(assets::demo_prog()).unwrap();
    assert_eq!(
        hex,
        "1043c0c,5010810,b011011,6010500,4030401,6030702,7000000,78,3f000000"
    );
}

#[test]
fn emitted_hex_decodes_back_to_the_packed_words() {
    let translation = translator::translate(assets::demo_prog());
    assert!(translation.is_clean());

    assert_eq!(
        oracle::verify(&translation.to_hex(), &translation.words),
        Ok(vec![])
    );
    assert_eq!(
        oracle::decode_hex(&hw::emit_hex(&[hw::pack(1, 4, 60, 12)])),
        Ok(vec![0x01043C0C])
    );
    assert_eq!(oracle::opcode_of(translation.words[6]), Some(Opcode::Hlt));
}

#[test]
fn single_instruction_programs_match_reference_words() {
    // Header line, then the instruction under test.
    let hex = translator::translate_hex("0,0,0,0\nOP_HLT,OP_NOP,OP_NOP,OP_NOP").unwrap();
    assert_eq!(hex, "0,7000000");

    let hex = translator::translate_hex("0,0,0,0\nOP_NOP,OP_NOP,OP_NOP,OP_NOP").unwrap();
    assert_eq!(hex, "0,0");
}

#[test]
fn first_comment_line_does_not_consume_the_header() {
    // "OP_HLT // stop" is a comment line: no word, no header->instruction
    // transition, and certainly no switch to literal mode.
    let hex = translator::translate_hex("OP_HLT // stop\n9,9,9,9\nOP_NOP").unwrap();
    assert_eq!(hex, "9090909,0");
}

#[test]
fn after_hlt_every_line_is_a_literal() {
    // A line that reads like a valid instruction must still be parsed as a
    // literal once the halt has been seen.
    let source = "0,0,0,0\nOP_HLT\nOP_NOP,OP_NOP,OP_NOP,OP_NOP\n42i";
    let translation = translator::translate(source);

    assert_eq!(translation.words, vec![0, 0x07000000, 42]);
    assert_eq!(translation.diagnostics.len(), 1);
    let diag = &translation.diagnostics[0];
    assert_eq!(diag.loc().line(), 3);
    assert!(matches!(diag.as_inner(), Error::MalformedNumber { .. }));
}

#[test]
fn diagnostics_accumulate_with_line_numbers_and_good_lines_still_emit() {
    let source = "\
// task with three bad lines
1,2,3,4
OP_MOV, PRE_MOV_IND, IREG_A, 5
OP_CMP, TSX_EQ, IREG_A, IREG_B
OP_JMP, IREG_A
OP_NOP
OP_HLT";
    let translation = translator::translate(source);

    assert_eq!(translation.words, vec![0x01020304, 0, 0x07000000]);
    let lines: Vec<usize> = translation
        .diagnostics
        .iter()
        .map(|diag| diag.loc().line())
        .collect();
    assert_eq!(lines, vec![3, 4, 5]);

    assert!(matches!(
        translation.diagnostics[0].as_inner(),
        Error::UndefinedGrammar(_)
    ));
    assert!(matches!(
        translation.diagnostics[1].as_inner(),
        Error::MalformedNumber { .. }
    ));
    assert!(matches!(
        translation.diagnostics[2].as_inner(),
        Error::UnknownSymbol { what: "opcode", .. }
    ));
}

#[test]
fn translate_hex_refuses_dirty_runs() {
    assert!(translator::translate_hex("1,2,3,4\nOP_BAD").is_err());
}

#[test]
fn mov_prefix_decides_how_the_same_text_encodes() {
    let ram = translator::translate_hex("0,0,0,0\nOP_MOV,PRE_MOV_RAM,IREG_A,5").unwrap();
    assert_eq!(ram, "0,1020005");

    // Under register mode "5" is not a register; the line must fail rather
    // than encode a sentinel byte.
    let reg = translator::translate("0,0,0,0\nOP_MOV,PRE_MOV_REG,IREG_A,5");
    assert_eq!(reg.words, vec![0]);
    assert!(matches!(
        reg.diagnostics[0].as_inner(),
        Error::UnknownSymbol { what: "register", .. }
    ));
}

#[test]
fn negative_literals_keep_their_bit_pattern() {
    let hex = translator::translate_hex("0,0,0,0\nOP_HLT\n-1i\n-2.0f").unwrap();
    assert_eq!(hex, "0,7000000,ffffffff,c0000000");
}
