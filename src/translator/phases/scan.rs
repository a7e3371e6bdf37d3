use super::types::{Loc, Located};
use crate::common;

/// A line is a comment if the marker occurs anywhere in it; such lines
/// produce no word and do not advance the translation mode.
pub const COMMENT_MARKER: &str = "//";

/// Splits the source into its translatable lines, in file order. Comment
/// and blank lines are dropped here so the encoder only ever sees lines
/// that owe it a word. Each surviving line arrives comma-split with every
/// field whitespace-trimmed, located at its 1-based source line.
pub fn scan(source: &str) -> Vec<Located<Vec<&str>>> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.contains(COMMENT_MARKER) && !line.trim().is_empty())
        .map(|(idx, line)| {
            Located::new(Loc::new(idx + 1), common::split_fields(line).collect())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(source: &str) -> Vec<(usize, Vec<&str>)> {
        scan(source)
            .into_iter()
            .map(|line| (line.loc().line(), line.value()))
            .collect()
    }

    #[test]
    fn splits_and_trims_fields() {
        assert_eq!(
            fields("OP_MOV, PRE_MOV_REG ,IREG_A,  IREG_B"),
            vec![(1, vec!["OP_MOV", "PRE_MOV_REG", "IREG_A", "IREG_B"])]
        );
    }

    #[test]
    fn comment_marker_anywhere_skips_whole_line() {
        assert_eq!(fields("// header goes here"), vec![]);
        assert_eq!(fields("OP_HLT // stop"), vec![]);
        assert_eq!(fields("0,1,2,3//4"), vec![]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(
            fields("1,2,3,4\n\n   \nOP_NOP"),
            vec![(1, vec!["1", "2", "3", "4"]), (4, vec!["OP_NOP"])]
        );
    }

    #[test]
    fn line_numbers_count_skipped_lines() {
        let src = "// preamble\n1,2,3,4\n// middle\nOP_NOP";
        assert_eq!(
            fields(src),
            vec![(2, vec!["1", "2", "3", "4"]), (4, vec!["OP_NOP"])]
        );
    }
}
