#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::io::BufRead;

use clap::Parser;

use cpc_lib::translate::{Direction, Translator};

mod cli;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = cli::Args::parse();

    let mut translator = Translator::from_config(args.config());
    let mut failures = 0;

    let mut translate_and_show = |input: &str| {
        match translator.translate_as(input, args.direction_of(input)) {
            Ok(translation) => match translation.direction {
                Direction::Sentence => println!("CPC: {}", translation.output),
                Direction::Formula => println!("NL: {}", translation.output),
            },
            Err(e) => {
                println!("Error: {e}");
                failures += 1;
            }
        };
    };

    if args.inputs.is_empty() {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) if line.trim().is_empty() => {}
                Ok(line) => translate_and_show(&line),
                Err(e) => {
                    println!("Failed to read input: {e}");
                    std::process::exit(1);
                }
            }
        }
    } else {
        for input in &args.inputs {
            translate_and_show(input);
        }
    }

    if args.mappings {
        print!("{}", translator.registry());
    }

    if failures > 0 {
        std::process::exit(2);
    }
}
