use std::path::PathBuf;

use ls8_bytecode::{Colors, dump};

use super::run_common;

pub struct DumpArgs {
    pub program_path: PathBuf,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let program = run_common::load_program(&args.program_path)
        .unwrap_or_else(|e| run_common::exit_with(e));

    let colors = Colors::new(args.color);
    print!("{}", dump(&program, colors));
}
