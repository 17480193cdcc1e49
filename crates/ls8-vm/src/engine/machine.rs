//! Machine state and the fetch-decode-execute loop.

use std::io::Write;

use ls8_bytecode::{Instruction, Opcode, Program};
use tracing::{debug, error, warn};

use super::alu::{AluOp, AluOutcome};
use super::error::RuntimeError;
use super::flags::Flags;
use super::memory::Memory;
use super::registers::RegisterFile;
use super::trace::{NoopTracer, Tracer};

/// Runtime limits for program execution.
#[derive(Clone, Copy, Debug, Default)]
pub struct FuelLimits {
    /// Maximum instructions to execute (default: unlimited).
    pub(crate) exec_fuel: Option<u32>,
}

impl FuelLimits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = Some(fuel);
        self
    }

    pub fn get_exec_fuel(&self) -> Option<u32> {
        self.exec_fuel
    }
}

/// Why the machine stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Halt {
    /// A HLT instruction was executed.
    Halted,
    /// The byte at `pc` is not in the instruction catalog.
    UnknownInstruction { opcode: u8, pc: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Running,
    Stopped(Halt),
    Faulted,
}

/// How the program counter moves after an instruction.
enum Flow {
    /// Advance past the instruction and its operands.
    Next,
    /// Set PC to an absolute address.
    Jump(u8),
    /// Advance past the instruction, then stop.
    Halt,
}

/// LS-8 machine: memory, registers, flags and program counter.
///
/// All state lives here and is mutated only through `step`/`run`.
pub struct Machine {
    pub(crate) memory: Memory,
    pub(crate) registers: RegisterFile,
    pub(crate) flags: Flags,
    /// Address of the next instruction byte. Kept wider than a byte so that
    /// running off the end of memory faults instead of wrapping.
    pub(crate) pc: usize,
    state: State,
    steps: u64,
    exec_fuel: Option<u32>,
    limits: FuelLimits,
}

/// Builder for machine instances.
#[derive(Default)]
pub struct MachineBuilder<'p> {
    program: Option<&'p Program>,
    limits: FuelLimits,
}

impl<'p> MachineBuilder<'p> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Program image to load at address 0.
    pub fn program(mut self, program: &'p Program) -> Self {
        self.program = Some(program);
        self
    }

    /// Set the fuel limits.
    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn build(self) -> Machine {
        let mut machine = Machine {
            memory: Memory::new(),
            registers: RegisterFile::new(),
            flags: Flags::default(),
            pc: 0,
            state: State::Running,
            steps: 0,
            exec_fuel: self.limits.get_exec_fuel(),
            limits: self.limits,
        };
        if let Some(program) = self.program {
            machine.load(program);
        }
        machine
    }
}

impl Machine {
    /// Create a machine builder.
    pub fn builder<'p>() -> MachineBuilder<'p> {
        MachineBuilder::new()
    }

    /// Create a machine with `program` loaded and no fuel limit.
    pub fn with_program(program: &Program) -> Self {
        Self::builder().program(program).build()
    }

    /// Copy a program image into memory starting at address 0.
    pub fn load(&mut self, program: &Program) {
        self.memory.load(program);
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Instructions executed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    /// Why the machine stopped, if it has.
    pub fn halt(&self) -> Option<Halt> {
        match self.state {
            State::Stopped(halt) => Some(halt),
            State::Running | State::Faulted => None,
        }
    }

    /// Run until halt, writing PRN output to `out`.
    ///
    /// This is a convenience method that uses `NoopTracer`, which gets
    /// optimized away at compile time.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Halt, RuntimeError> {
        self.run_with(out, &mut NoopTracer)
    }

    /// Run until halt with a tracer observing every fetch.
    pub fn run_with<W: Write, T: Tracer>(
        &mut self,
        out: &mut W,
        tracer: &mut T,
    ) -> Result<Halt, RuntimeError> {
        debug!(pc = self.pc, fuel = ?self.limits.get_exec_fuel(), "run started");
        loop {
            match self.state {
                State::Running => self.step_with(out, tracer)?,
                State::Stopped(halt) => {
                    debug!(?halt, steps = self.steps, "run finished");
                    return Ok(halt);
                }
                State::Faulted => return Err(RuntimeError::Faulted),
            }
        }
    }

    /// Execute exactly one instruction.
    pub fn step<W: Write>(&mut self, out: &mut W) -> Result<(), RuntimeError> {
        self.step_with(out, &mut NoopTracer)
    }

    /// Execute exactly one instruction with a tracer.
    ///
    /// Does nothing once the machine has halted. Any error marks the machine
    /// as faulted; later calls return [`RuntimeError::Faulted`].
    pub fn step_with<W: Write, T: Tracer>(
        &mut self,
        out: &mut W,
        tracer: &mut T,
    ) -> Result<(), RuntimeError> {
        match self.state {
            State::Running => {}
            State::Stopped(_) => return Ok(()),
            State::Faulted => return Err(RuntimeError::Faulted),
        }

        let result = self.fetch_and_execute(out, tracer);
        if let Err(e) = &result {
            error!(pc = self.pc, error = %e, "machine faulted");
            tracer.trace_fault(e);
            self.state = State::Faulted;
        }
        result
    }

    fn fetch_and_execute<W: Write, T: Tracer>(
        &mut self,
        out: &mut W,
        tracer: &mut T,
    ) -> Result<(), RuntimeError> {
        self.consume_fuel()?;

        let byte = self.memory.read(self.pc)?;
        tracer.trace_fetch(self);
        self.steps += 1;

        let Some(opcode) = Opcode::from_byte(byte) else {
            warn!(opcode = byte, pc = self.pc, "unknown instruction");
            self.stop(Halt::UnknownInstruction { opcode: byte, pc: self.pc }, tracer);
            return Ok(());
        };

        let instr = self.decode(opcode)?;
        match self.dispatch(instr, out, tracer)? {
            Flow::Next => self.pc += instr.size(),
            Flow::Jump(addr) => self.pc = addr as usize,
            Flow::Halt => {
                self.pc += instr.size();
                self.stop(Halt::Halted, tracer);
            }
        }
        Ok(())
    }

    fn consume_fuel(&mut self) -> Result<(), RuntimeError> {
        if let Some(fuel) = self.exec_fuel.as_mut() {
            if *fuel == 0 {
                let limit = self.limits.get_exec_fuel().unwrap_or_default();
                return Err(RuntimeError::ExecFuelExhausted(limit));
            }
            *fuel -= 1;
        }
        Ok(())
    }

    fn stop<T: Tracer>(&mut self, halt: Halt, tracer: &mut T) {
        tracer.trace_halt(halt);
        self.state = State::Stopped(halt);
    }

    /// Read the opcode's operands, which follow it directly in memory.
    fn decode(&self, opcode: Opcode) -> Result<Instruction, RuntimeError> {
        let mut operands = [0u8; 2];
        for (i, operand) in operands
            .iter_mut()
            .enumerate()
            .take(opcode.operand_count())
        {
            *operand = self.memory.read(self.pc + 1 + i)?;
        }
        Ok(Instruction::from_parts(opcode, operands))
    }

    fn dispatch<W: Write, T: Tracer>(
        &mut self,
        instr: Instruction,
        out: &mut W,
        tracer: &mut T,
    ) -> Result<Flow, RuntimeError> {
        match instr {
            Instruction::Nop => Ok(Flow::Next),
            Instruction::Hlt => Ok(Flow::Halt),
            Instruction::Ldi { reg, value } => {
                self.registers.set(reg, value)?;
                Ok(Flow::Next)
            }
            Instruction::Prn(reg) => self.exec_prn(reg, out, tracer),
            Instruction::Add(a, b) => self.exec_alu(AluOp::Add, a, b),
            Instruction::Mul(a, b) => self.exec_alu(AluOp::Mul, a, b),
            Instruction::Cmp(a, b) => self.exec_alu(AluOp::Cmp, a, b),
            Instruction::Push(reg) => self.exec_push(reg),
            Instruction::Pop(reg) => self.exec_pop(reg),
            Instruction::Call(reg) => self.exec_call(reg),
            Instruction::Ret => self.exec_ret(),
            Instruction::Jmp(reg) => Ok(Flow::Jump(self.registers.get(reg)?)),
            Instruction::Jeq(reg) => self.exec_branch(reg, self.flags.equal()),
            Instruction::Jne(reg) => self.exec_branch(reg, !self.flags.equal()),
        }
    }

    fn exec_prn<W: Write, T: Tracer>(
        &mut self,
        reg: u8,
        out: &mut W,
        tracer: &mut T,
    ) -> Result<Flow, RuntimeError> {
        let value = self.registers.get(reg)?;
        writeln!(out, "{value}")?;
        tracer.trace_output(value);
        Ok(Flow::Next)
    }

    fn exec_alu(&mut self, op: AluOp, a: u8, b: u8) -> Result<Flow, RuntimeError> {
        let lhs = self.registers.get(a)?;
        let rhs = self.registers.get(b)?;
        match op.apply(lhs, rhs) {
            AluOutcome::Write(value) => self.registers.set(a, value)?,
            AluOutcome::Flags(flags) => self.flags = flags,
        }
        Ok(Flow::Next)
    }

    fn exec_push(&mut self, reg: u8) -> Result<Flow, RuntimeError> {
        let value = self.registers.get(reg)?;
        self.push(value)?;
        Ok(Flow::Next)
    }

    fn exec_pop(&mut self, reg: u8) -> Result<Flow, RuntimeError> {
        let value = self.memory.read(self.registers.sp() as usize)?;
        self.registers.set(reg, value)?;
        self.increment_sp()?;
        Ok(Flow::Next)
    }

    fn exec_call(&mut self, reg: u8) -> Result<Flow, RuntimeError> {
        let next = self.pc + 2;
        let return_addr = u8::try_from(next).map_err(|_| RuntimeError::AddressOutOfRange(next))?;
        self.push(return_addr)?;
        // Target is read after SP moves, so `CALL R7` jumps to the new stack top.
        Ok(Flow::Jump(self.registers.get(reg)?))
    }

    fn exec_ret(&mut self) -> Result<Flow, RuntimeError> {
        let addr = self.memory.read(self.registers.sp() as usize)?;
        self.increment_sp()?;
        Ok(Flow::Jump(addr))
    }

    fn exec_branch(&mut self, reg: u8, taken: bool) -> Result<Flow, RuntimeError> {
        if taken {
            Ok(Flow::Jump(self.registers.get(reg)?))
        } else {
            Ok(Flow::Next)
        }
    }

    /// Decrement SP, then store `value` at the new top of stack.
    fn push(&mut self, value: u8) -> Result<(), RuntimeError> {
        let sp = self.registers.sp();
        let sp = sp.checked_sub(1).ok_or(RuntimeError::StackOverflow(sp))?;
        self.registers.set_sp(sp);
        self.memory.write(sp as usize, value)
    }

    fn increment_sp(&mut self) -> Result<(), RuntimeError> {
        let sp = self.registers.sp();
        let sp = sp.checked_add(1).ok_or(RuntimeError::StackUnderflow(sp))?;
        self.registers.set_sp(sp);
        Ok(())
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::builder().build()
    }
}
