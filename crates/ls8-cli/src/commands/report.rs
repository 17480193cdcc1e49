//! JSON run report for `ls8 run --json`.

use ls8_vm::{Halt, Machine, RuntimeError, Tracer};
use serde::Serialize;

/// Final state of a run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Values printed by PRN, in order.
    pub output: Vec<u8>,
    pub stop: StopReason,
    pub steps: u64,
    pub pc: usize,
    pub registers: [u8; 8],
    pub flags: u8,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum StopReason {
    Halted,
    UnknownInstruction { opcode: u8, pc: usize },
    Fault { message: String },
}

impl RunReport {
    /// Collect the report from a machine after `run` returned `result`.
    ///
    /// `output` holds the PRN values in print order.
    pub fn new(machine: &Machine, result: &Result<Halt, RuntimeError>, output: Vec<u8>) -> Self {
        let stop = match result {
            Ok(Halt::Halted) => StopReason::Halted,
            Ok(Halt::UnknownInstruction { opcode, pc }) => StopReason::UnknownInstruction {
                opcode: *opcode,
                pc: *pc,
            },
            Err(e) => StopReason::Fault {
                message: e.to_string(),
            },
        };

        Self {
            output,
            stop,
            steps: machine.steps(),
            pc: machine.pc(),
            registers: *machine.registers().as_array(),
            flags: machine.flags().bits(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Tracer that records each PRN value as it is printed.
#[derive(Debug, Default)]
pub struct OutputRecorder {
    values: Vec<u8>,
}

impl OutputRecorder {
    pub fn into_values(self) -> Vec<u8> {
        self.values
    }
}

impl Tracer for OutputRecorder {
    fn trace_fetch(&mut self, _machine: &Machine) {}

    fn trace_output(&mut self, value: u8) {
        self.values.push(value);
    }
}
