extern crate clap;
extern crate thiserror;

pub mod parser;
pub mod processor;

use std::{collections::HashSet, time::Instant};

use clap::{Parser, ValueEnum};
use colored::Colorize;

use crate::processor::{corrections::find_correction, Processor};

/// Boot-code interpreter: loop detection and one-flip corrective search
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The boot-code file to operate on
    #[arg()]
    file: String,

    /// Stages to run; with none given, both answers are produced
    #[arg(value_enum)]
    commands: Vec<Commands>,
}

#[derive(ValueEnum, Debug, Clone, Hash, PartialEq, Eq)]
enum Commands {
    /// Output the decoded program
    Program,
    /// Run the unmodified program until an instruction repeats
    Halt,
    /// Search for the single nop/jmp flip that lets the program terminate
    Fix,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let commands: HashSet<Commands> = HashSet::from_iter(args.commands.into_iter());
    let run_all = commands.is_empty();

    println!("Running {}", args.file);

    println!("{}", "Starting parsing".blue());
    let now = Instant::now();
    let program = match parser::Program::from_file(&args.file) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{0:}: {1:}", "Error".red(), e);
            std::process::exit(1);
        }
    };
    println!(
        "{} {} instructions in {:.2?}",
        "Finished parsing,".green(),
        program.len(),
        now.elapsed()
    );

    if commands.contains(&Commands::Program) {
        println!("{:#?}", program);
    }

    if run_all || commands.contains(&Commands::Halt) {
        println!("{}", "Starting loop detection".blue());
        let now = Instant::now();
        let mut processor = Processor::new(program.clone());
        match processor.run_until_loop() {
            Ok(accumulator) => println!("part one: {}", accumulator),
            Err(e) => {
                eprintln!("{0:}: {1:}", "Error".red(), e);
                std::process::exit(1);
            }
        }
        println!(
            "{} {:.2?}",
            "Finished loop detection in".green(),
            now.elapsed()
        );
    }

    if run_all || commands.contains(&Commands::Fix) {
        println!("{}", "Starting corrective search".blue());
        let now = Instant::now();
        match find_correction(&program) {
            Some(accumulator) => println!("part two: {}", accumulator),
            None => {
                eprintln!(
                    "{0:}: no single nop/jmp flip terminates this program",
                    "Error".red()
                );
                std::process::exit(1);
            }
        }
        println!(
            "{} {:.2?}",
            "Finished corrective search in".green(),
            now.elapsed()
        );
    }
}
