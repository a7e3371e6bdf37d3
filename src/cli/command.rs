use crate::translator;
use ansi_term::Colour::Red;
use anyhow::Context;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

#[cfg(windows)]
pub fn terminal_init() {
    ansi_term::enable_ansi_support().expect("Could enable terminal ANSI support");
}

#[cfg(not(windows))]
pub fn terminal_init() {}

/// Translates the source at `-s <path>` and writes the packed program to
/// stdout as one comma-joined hex line.
#[derive(StructOpt, Debug)]
#[structopt(name = "splasm")]
pub struct Command {
    #[structopt(short = "s", long = "source", name = "in.spl", parse(from_os_str))]
    source: PathBuf,
}

pub fn run(cmd: Command) -> ! {
    std::process::exit(match translate_path(&cmd.source) {
        Ok(clean) => {
            if clean {
                0
            } else {
                1
            }
        }
        Err(err) => {
            eprintln!("{} {:#}", Red.paint("error:"), err);
            1
        }
    })
}

/// Prints the hex for every line that translated and a diagnostic for every
/// line that did not; returns whether the run was clean. Partial output is
/// deliberate, the exit code is what marks the run as failed.
fn translate_path(path: &Path) -> Result<bool, anyhow::Error> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("could not read source file '{}'", path.display()))?;

    let translation = translator::translate(&source);
    println!("{}", translation.to_hex());

    for diag in &translation.diagnostics {
        eprintln!("{} {}", Red.paint("error:"), diag);
    }

    Ok(translation.is_clean())
}
