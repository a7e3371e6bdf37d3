use splasm::cli::command;
use structopt::StructOpt;

fn main() {
    command::terminal_init();
    command::run(command::Command::from_args());
}
