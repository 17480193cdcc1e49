//! Run a program to completion.

use std::io::{self, Write};
use std::path::PathBuf;

use super::report::{OutputRecorder, RunReport};
use super::run_common::{self, CommandError};

pub struct RunArgs {
    pub program_path: PathBuf,
    pub fuel: Option<u32>,
    pub json: bool,
    pub pretty: bool,
}

pub fn run(args: RunArgs) {
    let program = run_common::load_program(&args.program_path)
        .unwrap_or_else(|e| run_common::exit_with(e));
    let mut machine = run_common::build_machine(&program, args.fuel);

    if !args.json {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let result = machine.run(&mut out);
        let flushed = out.flush();
        run_common::finish(result, flushed);
        return;
    }

    let mut recorder = OutputRecorder::default();
    let result = machine.run_with(&mut io::sink(), &mut recorder);
    let report = RunReport::new(&machine, &result, recorder.into_values());
    match report.to_json(args.pretty) {
        Ok(json) => println!("{}", json),
        Err(e) => run_common::exit_with(CommandError::Json(e)),
    }

    let code = match result {
        Ok(halt) => run_common::halt_exit_code(halt),
        Err(_) => run_common::EXIT_FAULT,
    };
    if code != 0 {
        std::process::exit(code);
    }
}
