pub mod oracle;
pub mod phases;

pub use phases::types::{Error, Located, Mode};

use crate::spec::types::hw::{self, Word};

/// One pass over a source text: the packed words for every line that
/// translated cleanly, plus one diagnostic per line that did not. Words
/// stay in source order; a failed line costs no word.
#[derive(Debug)]
pub struct Translation {
    pub words: Vec<Word>,
    pub diagnostics: Vec<Located<Error>>,
}

impl Translation {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hw::emit_hex(&self.words)
    }
}

pub fn translate(source: &str) -> Translation {
    let lines = phases::scan(source);
    let (words, diagnostics) = phases::encode(lines);
    Translation { words, diagnostics }
}

/// Convenience for callers with no use for partial output: the hex line if
/// every line translated, otherwise all the diagnostics.
pub fn translate_hex(source: &str) -> Result<String, Vec<Located<Error>>> {
    let translation = translate(source);
    if translation.is_clean() {
        Ok(translation.to_hex())
    } else {
        Err(translation.diagnostics)
    }
}
