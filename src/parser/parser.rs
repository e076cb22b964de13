use super::{Instruction, Operation, ParseError, Program};

pub struct Parser<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str) -> Parser<'a> {
        Parser {
            lines: text.lines().enumerate(),
        }
    }

    fn parse_line(line_number: usize, line: &str) -> Result<Instruction, ParseError> {
        let (op, argument) = line.split_once(' ').ok_or_else(|| ParseError::MalformedLine {
            line: line_number,
            text: line.to_string(),
        })?;

        let operation = match op {
            "nop" => Operation::Nop,
            "jmp" => Operation::Jmp,
            "acc" => Operation::Acc,
            _ => {
                return Err(ParseError::UnknownOperation {
                    line: line_number,
                    operation: op.to_string(),
                })
            }
        };

        // the sign is part of the format: `jmp 4` is as malformed as `jmp x`
        if !(argument.starts_with('+') || argument.starts_with('-')) {
            return Err(ParseError::BadArgument {
                line: line_number,
                argument: argument.to_string(),
            });
        }
        let argument = argument.parse::<i64>().map_err(|_| ParseError::BadArgument {
            line: line_number,
            argument: argument.to_string(),
        })?;

        Ok(Instruction { operation, argument })
    }

    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut instructions = vec![];

        for (index, line) in self.lines.by_ref() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            // error messages count lines the way an editor does
            instructions.push(Self::parse_line(index + 1, line)?);
        }

        Ok(Program { instructions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_all_three_operations() {
        let program = Parser::new("nop +0\nacc -99\njmp +4\n").parse_program().unwrap();
        assert_eq!(
            program.instructions,
            vec![
                Instruction {
                    operation: Operation::Nop,
                    argument: 0
                },
                Instruction {
                    operation: Operation::Acc,
                    argument: -99
                },
                Instruction {
                    operation: Operation::Jmp,
                    argument: 4
                },
            ]
        );
    }

    #[test]
    fn empty_input_is_an_empty_program() {
        assert!(Parser::new("").parse_program().unwrap().is_empty());
    }

    #[test]
    fn skips_blank_lines() {
        let program = Parser::new("nop +0\n\n  \nacc +1\n").parse_program().unwrap();
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn rejects_unknown_operation() {
        let error = Parser::new("nop +0\nhcf +1\n").parse_program().unwrap_err();
        assert!(matches!(error, ParseError::UnknownOperation { line: 2, .. }));
    }

    #[test]
    fn rejects_line_without_argument() {
        let error = Parser::new("jmp\n").parse_program().unwrap_err();
        assert!(matches!(error, ParseError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn rejects_unsigned_argument() {
        let error = Parser::new("jmp 4\n").parse_program().unwrap_err();
        assert!(matches!(error, ParseError::BadArgument { line: 1, .. }));
    }

    #[test]
    fn rejects_non_numeric_argument() {
        let error = Parser::new("acc +ten\n").parse_program().unwrap_err();
        assert!(matches!(error, ParseError::BadArgument { line: 1, .. }));
    }
}
