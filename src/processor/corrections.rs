use log::debug;

use super::{Processor, RunOutcome};
use crate::parser::Program;

/// Try flipping one `nop`/`jmp` at a time, in increasing position order,
/// until a flipped copy of the program terminates normally. Returns that
/// copy's final accumulator, or `None` if no single flip terminates.
///
/// `acc` positions are never candidates. A copy that still loops, or whose
/// flipped jump lands out of bounds, just moves the search along.
pub fn find_correction(program: &Program) -> Option<i64> {
    for position in 0..program.len() {
        let flipped = match program.instructions[position].opposite() {
            Some(flipped) => flipped,
            None => continue,
        };

        // each attempt runs over its own copy so executed flags never leak
        let mut candidate = program.clone();
        candidate.instructions[position] = flipped;

        let mut processor = Processor::new(candidate);
        match processor.run() {
            Ok(RunOutcome::Terminated { accumulator }) => {
                debug!("flip at position {} terminates", position);
                return Some(accumulator);
            }
            Ok(RunOutcome::LoopDetected { .. }) => {
                debug!("flip at position {} still loops", position);
            }
            Err(error) => {
                debug!("flip at position {} aborts: {}", position, error);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parser::Parser;
    use crate::parser::{Instruction, Operation};

    const LOOPING: &str =
        "nop +0\nacc +1\njmp +4\nacc +3\njmp -3\nacc -99\nacc +1\njmp -4\nacc +6\n";

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn program(text: &str) -> Program {
        Parser::new(text).parse_program().unwrap()
    }

    #[test]
    fn opposite_swaps_nop_and_jmp_only() {
        let nop = Instruction {
            operation: Operation::Nop,
            argument: -4,
        };
        let jmp = Instruction {
            operation: Operation::Jmp,
            argument: -4,
        };
        let acc = Instruction {
            operation: Operation::Acc,
            argument: -4,
        };
        assert_eq!(nop.opposite(), Some(jmp));
        assert_eq!(jmp.opposite(), Some(nop));
        assert_eq!(acc.opposite(), None);
    }

    #[test]
    fn finds_the_single_terminating_flip() {
        init();
        // flipping the `jmp -4` at position 7 into `nop -4` is the fix
        assert_eq!(find_correction(&program(LOOPING)), Some(8));
    }

    #[test]
    fn search_leaves_the_original_untouched() {
        init();
        let source = program(LOOPING);
        let before = source.clone();
        find_correction(&source);
        assert_eq!(source, before);
    }

    #[test]
    fn accumulate_positions_are_never_candidates() {
        init();
        // nothing to flip at all, the search comes up empty
        assert_eq!(find_correction(&program("acc +1\nacc +1\nacc +1\n")), None);
    }

    #[test]
    fn flip_that_jumps_out_of_bounds_is_not_a_fix() {
        init();
        // the only candidate is `nop -1` -> `jmp -1`, which lands before the
        // start; the program already terminates, so there is nothing to find
        assert_eq!(find_correction(&program("nop -1\n")), None);
    }

    #[test]
    fn search_moves_past_an_out_of_bounds_attempt() {
        init();
        // position 0 flips to `jmp +5` (out of bounds), position 1 flips to
        // `nop +0` and lets the program run off the end
        assert_eq!(
            find_correction(&program("nop +5\njmp +0\nacc +7\n")),
            Some(7)
        );
    }
}
