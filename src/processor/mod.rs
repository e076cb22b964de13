use log::trace;
use thiserror::Error;

use crate::parser::{Operation, Program};

pub mod corrections;

/// Why a run reached a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The position landed exactly on the end of the program.
    Terminated { accumulator: i64 },
    /// Some instruction was about to execute a second time.
    LoopDetected { accumulator: i64 },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecError {
    /// A jump landed strictly past the end of the program or before its
    /// start. The reference behaviour would spin forever on this; reporting
    /// it keeps `run` total.
    #[error("position {position} is outside the program (length {length})")]
    OutOfBounds { position: i64, length: usize },
}

/// Executes a boot-code program: a position register, an accumulator, and
/// one already-executed flag per instruction for loop detection.
pub struct Processor {
    program: Program,
    position: usize,
    accumulator: i64,
    executed: Vec<bool>,
}

impl Processor {
    pub fn new(program: Program) -> Self {
        let executed = vec![false; program.len()];
        Self {
            program,
            position: 0,
            accumulator: 0,
            executed,
        }
    }

    pub fn accumulator(&self) -> i64 {
        self.accumulator
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Run until the position lands exactly on the end of the program, or
    /// until an instruction comes up for the second time. The repeated
    /// instruction is never applied: the outcome carries the accumulator as
    /// it was just before the repeat.
    ///
    /// Executed flags are not reset between calls, so a processor that
    /// already detected a loop reports the same loop again. Each independent
    /// run needs a fresh processor.
    pub fn run(&mut self) -> Result<RunOutcome, ExecError> {
        while self.position != self.program.len() {
            if self.executed[self.position] {
                return Ok(RunOutcome::LoopDetected {
                    accumulator: self.accumulator,
                });
            }
            self.executed[self.position] = true;

            let instruction = self.program.instructions[self.position];
            let (position_change, acc_change) = match instruction.operation {
                Operation::Nop => (1, 0),
                Operation::Jmp => (instruction.argument, 0),
                Operation::Acc => (1, instruction.argument),
            };

            trace!(
                "position: {:4}, accumulator: {:6} | {:?}",
                self.position,
                self.accumulator,
                instruction
            );

            let next = self.position as i64 + position_change;
            if next < 0 || next > self.program.len() as i64 {
                return Err(ExecError::OutOfBounds {
                    position: next,
                    length: self.program.len(),
                });
            }
            self.position = next as usize;
            self.accumulator += acc_change;
        }

        Ok(RunOutcome::Terminated {
            accumulator: self.accumulator,
        })
    }

    /// Accumulator at the first repeated instruction, or at normal
    /// termination if the program never loops.
    pub fn run_until_loop(&mut self) -> Result<i64, ExecError> {
        match self.run()? {
            RunOutcome::Terminated { accumulator } => Ok(accumulator),
            RunOutcome::LoopDetected { accumulator } => Ok(accumulator),
        }
    }
}
