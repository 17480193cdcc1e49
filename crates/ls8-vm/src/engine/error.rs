//! Runtime errors for machine execution.

use thiserror::Error;

/// Fatal conditions that abort a run.
///
/// After any of these the machine state is undefined and the machine
/// refuses to continue (see [`RuntimeError::Faulted`]).
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("address {0:#04x} out of range")]
    AddressOutOfRange(usize),
    #[error("register R{0} out of range")]
    InvalidRegister(u8),
    /// Push or call with the stack pointer already at address 0.
    #[error("stack overflow: SP is {0:#04x}")]
    StackOverflow(u8),
    /// Pop or return with the stack pointer at the top of memory.
    #[error("stack underflow: SP is {0:#04x}")]
    StackUnderflow(u8),
    #[error("execution fuel exhausted after {0} steps")]
    ExecFuelExhausted(u32),
    #[error("machine faulted and cannot resume")]
    Faulted,
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
