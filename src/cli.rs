use clap::{Parser, ValueEnum};

use cpc_lib::{
    config::{Config, OverflowPolicy},
    translate::Direction,
};

/// Translates between Portuguese sentences and formulas of classical propositional logic.
///
/// Inputs share a single session, so variables are consistent across inputs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Sentences or formulas to translate. If none are given, lines are read from standard input.
    pub inputs: Vec<String>,

    /// How to read each input.
    #[arg(short, long, value_enum, default_value_t = DirectionArg::Auto)]
    pub direction: DirectionArg,

    /// What to do once the variables A to Z have been used.
    #[arg(long, value_enum, default_value_t = OverflowArg::Extend)]
    pub overflow: OverflowArg,

    /// The deepest nesting permitted in a sentence.
    #[arg(long, default_value_t = cpc_lib::config::defaults::MAX_DEPTH)]
    pub max_depth: usize,

    /// Display the propositions and their variables after translating all inputs.
    #[arg(short, long)]
    pub mappings: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    /// Formulas contain a connective symbol or a parenthesis, and anything else is a sentence.
    Auto,
    /// Read every input as a formula.
    Formula,
    /// Read every input as a sentence.
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OverflowArg {
    /// Continue with AA, AB, …
    Extend,
    /// Fail to translate.
    Error,
}

impl Args {
    pub fn config(&self) -> Config {
        let overflow = match self.overflow {
            OverflowArg::Extend => OverflowPolicy::Extend,
            OverflowArg::Error => OverflowPolicy::Error,
        };

        Config {
            overflow,
            max_depth: self.max_depth,
            ..Default::default()
        }
    }

    /// The direction to translate `input`.
    pub fn direction_of(&self, input: &str) -> Direction {
        match self.direction {
            DirectionArg::Auto => Direction::of(input),
            DirectionArg::Formula => Direction::Formula,
            DirectionArg::Text => Direction::Sentence,
        }
    }
}
