use thiserror::Error;

pub mod parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    // `nop`: do nothing, move on to the next instruction
    Nop,
    // `jmp`: move to another instruction relative to the current one
    Jmp,
    // `acc`: add the argument to the accumulator, then move on
    Acc,
}

/// One decoded line of boot code: an operation and its signed argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub operation: Operation,
    pub argument: i64,
}

impl Instruction {
    /// The `nop` <-> `jmp` flip the corrective search tries.
    /// `acc` has no opposite and yields `None`.
    pub fn opposite(&self) -> Option<Instruction> {
        let operation = match self.operation {
            Operation::Nop => Operation::Jmp,
            Operation::Jmp => Operation::Nop,
            Operation::Acc => return None,
        };

        Some(Instruction {
            operation,
            argument: self.argument,
        })
    }
}

/// An ordered, fixed-length boot-code program.
///
/// Holds no run-time state: executed flags live in the processor, so a plain
/// `clone` is all the corrective search needs for an isolated attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}

impl Program {
    pub fn from_file(path: &str) -> Result<Program, ParseError> {
        let text = std::fs::read_to_string(path)?;
        parser::Parser::new(&text).parse_program()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO Error")]
    FileIO(
        #[from]
        std::io::Error,
    ),

    #[error("line {line}: expected `<op> <argument>`, got `{text}`")]
    MalformedLine { line: usize, text: String },

    #[error("line {line}: unknown operation `{operation}`")]
    UnknownOperation { line: usize, operation: String },

    #[error("line {line}: argument `{argument}` is not a signed integer")]
    BadArgument { line: usize, argument: String },
}
