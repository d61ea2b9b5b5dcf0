/*!
A translation session, and the direction of a translation.

A [Translator] owns a [Registry] and a [Config], and translates in both directions:
- [Sentences to formulas](sentence), with [translate_to_formula](Translator::translate_to_formula).
- [Formulas to sentences](formula), with [translate_to_text](Translator::translate_to_text).

Both directions share the registry of the translator, so a variable read in a formula stands for the proposition which was given the variable when a sentence was read.
Separate sessions should use separate translators.

```rust
# use cpc_lib::translate::{Direction, Translator};
let mut translator = Translator::default();

let formula = translator.translate("Se chove então a rua fica molhada.").unwrap();
assert_eq!(formula.direction, Direction::Sentence);
assert_eq!(formula.output, "(A → B)");

let sentence = translator.translate(&formula.output).unwrap();
assert_eq!(sentence.direction, Direction::Formula);
assert_eq!(sentence.output, "chove implica a rua fica molhada");
```
*/

pub mod formula;
pub mod sentence;

use crate::{
    config::Config,
    db::registry::Registry,
    structures::{connective::Connective, variable::Variable},
    types::err::TranslationError,
};

/// The kind of input, and so the direction of translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// A sentence, to be translated to a formula.
    Sentence,

    /// A formula, to be translated to a sentence.
    Formula,
}

impl Direction {
    /// [Direction::Formula] if `input` contains a connective symbol or a parenthesis, and [Direction::Sentence] otherwise.
    pub fn of(input: &str) -> Self {
        let formulaic = input
            .chars()
            .any(|c| c == '(' || c == ')' || Connective::from_symbol(c).is_some());

        match formulaic {
            true => Direction::Formula,
            false => Direction::Sentence,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sentence => write!(f, "sentence"),
            Self::Formula => write!(f, "formula"),
        }
    }
}

/// The result of a translation in either direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    /// The direction taken.
    pub direction: Direction,

    /// A formula, if the input was a sentence, and a sentence, if the input was a formula.
    pub output: String,
}

pub struct Translator {
    /// The configuration of the translator.
    pub config: Config,

    /// Propositions and their variables.
    registry: Registry,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::from_config(Config::default())
    }
}

impl Translator {
    /// A translator with the default configuration and an empty registry.
    pub fn new() -> Self {
        Translator::default()
    }

    pub fn from_config(config: Config) -> Self {
        let registry = Registry::new(&config);
        Translator { config, registry }
    }

    /// The registry of the translator.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Every (proposition, variable) pair of the session, in order of allocation.
    pub fn all_mappings(&self) -> impl Iterator<Item = (&str, Variable)> {
        self.registry.all_mappings()
    }

    /// Translates `input` in the direction given by [Direction::of].
    pub fn translate(&mut self, input: &str) -> Result<Translation, TranslationError> {
        self.translate_as(input, Direction::of(input))
    }

    /// Translates `input` as a sentence or as a formula, as directed.
    pub fn translate_as(
        &mut self,
        input: &str,
        direction: Direction,
    ) -> Result<Translation, TranslationError> {
        let output = match direction {
            Direction::Sentence => self.translate_to_formula(input)?.to_string(),
            Direction::Formula => self.translate_to_text(input)?,
        };
        Ok(Translation { direction, output })
    }
}
