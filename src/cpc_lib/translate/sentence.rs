/*!
Translation of sentences to formulas.

A sentence is normalised (lowercase, trimmed, with one trailing terminator removed) and then examined by each [recognizer](RECOGNIZERS) in turn.
The first recognizer to match decides the connective, and each part of the sentence found is translated in turn, left before right.
If no recognizer matches, the sentence is an atomic proposition, and is given a variable by the registry.

The recognizers are shallow, and order matters.
In particular, "se e somente se" contains " e ", and so a sentence with a biconditional is always matched first as a conjunction.

```rust
# use cpc_lib::translate::Translator;
let mut translator = Translator::default();
assert_eq!(translator.translate_to_formula("Chove.").unwrap().to_string(), "A");
assert_eq!(translator.translate_to_formula("chove e faz frio").unwrap().to_string(), "(A ∧ B)");
assert_eq!(translator.translate_to_formula("se chove então faz frio").unwrap().to_string(), "(A → B)");
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{connective::Connective, formula::Formula},
    types::err::{ErrorCause, TranslationError},
};

use super::Translator;

/// The shape of sentence a recognizer looks for.
#[derive(Debug)]
pub enum Pattern {
    /// The keyword, some whitespace, and then a single word.
    ///
    /// Matched at the first occurrence of the keyword followed by a word, anywhere in a sentence.
    Prefix(&'static str),

    /// The lead keyword, an antecedent, the link keyword, and a consequent.
    ///
    /// Matched at the first viable lead, with the antecedent running to the last viable link.
    Conditional(&'static str, &'static str),

    /// A left part, the keyword, and a right part, with whitespace either side of the keyword.
    ///
    /// Matched at the last viable occurrence of the keyword.
    Infix(&'static str),
}

/// The parts of a sentence found by a [Pattern].
#[derive(Debug, PartialEq, Eq)]
pub enum Parts<'s> {
    Word(&'s str),
    Pair(&'s str, &'s str),
}

pub struct Recognizer {
    pub pattern: Pattern,
    pub connective: Connective,
}

/// Recognizers, in order of priority.
pub static RECOGNIZERS: [Recognizer; 5] = [
    Recognizer {
        pattern: Pattern::Prefix("não"),
        connective: Connective::Not,
    },
    Recognizer {
        pattern: Pattern::Conditional("se", "então"),
        connective: Connective::Implies,
    },
    Recognizer {
        pattern: Pattern::Infix("e"),
        connective: Connective::And,
    },
    Recognizer {
        pattern: Pattern::Infix("ou"),
        connective: Connective::Or,
    },
    Recognizer {
        pattern: Pattern::Infix("se e somente se"),
        connective: Connective::Iff,
    },
];

impl Pattern {
    pub fn find<'s>(&self, sentence: &'s str) -> Option<Parts<'s>> {
        match self {
            Self::Prefix(keyword) => word_after(sentence, keyword).map(Parts::Word),

            Self::Conditional(lead, link) => {
                for (index, _) in sentence.match_indices(lead) {
                    let rest = &sentence[index + lead.len()..];
                    let space = leading_space(rest);
                    if space == 0 {
                        continue;
                    }
                    let from = sentence.len() - rest.len() + space;
                    if let Some((antecedent, consequent)) = split_last(sentence, from, link) {
                        return Some(Parts::Pair(antecedent, consequent));
                    }
                }
                None
            }

            Self::Infix(keyword) => {
                split_last(sentence, 0, keyword).map(|(left, right)| Parts::Pair(left, right))
            }
        }
    }
}

/// The length in bytes of the whitespace at the start of `text`.
fn leading_space(text: &str) -> usize {
    text.len() - text.trim_start().len()
}

/// The first word following some occurrence of `keyword` and whitespace.
fn word_after<'s>(text: &'s str, keyword: &str) -> Option<&'s str> {
    for (index, _) in text.match_indices(keyword) {
        let rest = &text[index + keyword.len()..];
        let space = leading_space(rest);
        if space == 0 {
            continue;
        }
        let after = &rest[space..];
        let word_length = after
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        if word_length > 0 {
            return Some(&after[..word_length]);
        }
    }
    None
}

/// A split of `text[from..]` around the last occurrence of `keyword` which has whitespace on either side and something on either side of the whitespace.
fn split_last<'s>(text: &'s str, from: usize, keyword: &str) -> Option<(&'s str, &'s str)> {
    let region = &text[from..];
    for (index, _) in region.rmatch_indices(keyword) {
        let before = &region[..index];
        let left = match before.chars().next_back() {
            Some(c) if c.is_whitespace() => &before[..before.len() - c.len_utf8()],
            _ => continue,
        };

        let after = &region[index + keyword.len()..];
        let space = leading_space(after);
        let right = &after[space..];

        if !left.is_empty() && space > 0 && !right.is_empty() {
            return Some((left, right));
        }
    }
    None
}

impl Translator {
    /// Translates a sentence to a formula, allocating variables for any unseen propositions.
    ///
    /// ```rust
    /// # use cpc_lib::translate::Translator;
    /// let mut translator = Translator::default();
    /// let formula = translator.translate_to_formula("não chove").unwrap();
    /// assert_eq!(formula.to_string(), "¬A");
    /// ```
    pub fn translate_to_formula(&mut self, sentence: &str) -> Result<Formula, TranslationError> {
        log::trace!(target: targets::SENTENCE, "Translating: {sentence}");
        let formula = self.sentence_formula(sentence, 0)?;
        log::debug!(target: targets::SENTENCE, "{sentence} ⇒ {formula}");
        Ok(formula)
    }

    /// The normal form of a sentence, prior to recognition.
    pub fn normalise_sentence(&self, sentence: &str) -> String {
        let mut the_sentence = sentence.to_lowercase().trim().to_string();
        if the_sentence
            .chars()
            .next_back()
            .is_some_and(|last| self.config.terminators.contains(&last))
        {
            the_sentence.pop();
        }
        the_sentence
    }

    fn sentence_formula(
        &mut self,
        sentence: &str,
        depth: usize,
    ) -> Result<Formula, TranslationError> {
        if depth > self.config.max_depth {
            return Err(TranslationError::from(ErrorCause::DepthExceeded(
                self.config.max_depth,
            )));
        }

        let the_sentence = self.normalise_sentence(sentence);

        for recognizer in &RECOGNIZERS {
            let Some(parts) = recognizer.pattern.find(&the_sentence) else {
                continue;
            };
            log::trace!(
                target: targets::SENTENCE,
                "{:?} matched '{the_sentence}'",
                recognizer.pattern
            );

            return match parts {
                Parts::Word(word) => {
                    // The word is atomic, whatever it is.
                    let variable = self.registry.obtain_variable(word)?;
                    Ok(Formula::negation(Formula::Variable(variable)))
                }

                Parts::Pair(left, right) => {
                    let left_formula = self.sentence_formula(left, depth + 1)?;
                    let right_formula = self.sentence_formula(right, depth + 1)?;
                    Ok(Formula::binary(
                        recognizer.connective,
                        left_formula,
                        right_formula,
                    ))
                }
            };
        }

        if the_sentence.trim().is_empty() {
            return Err(TranslationError::from(ErrorCause::EmptyProposition));
        }

        let variable = self.registry.obtain_variable(&the_sentence)?;
        Ok(Formula::Variable(variable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizers_agree_with_phrases() {
        for recognizer in &RECOGNIZERS {
            let keyword = match recognizer.pattern {
                Pattern::Prefix(keyword) => keyword,
                Pattern::Conditional(lead, link) => {
                    assert_eq!(Connective::from_phrase(link), Some(recognizer.connective));
                    lead
                }
                Pattern::Infix(keyword) => keyword,
            };
            assert_eq!(Connective::from_phrase(keyword), Some(recognizer.connective));
        }
    }

    #[test]
    fn prefix_takes_one_word() {
        let pattern = Pattern::Prefix("não");
        assert_eq!(pattern.find("não chove"), Some(Parts::Word("chove")));
        assert_eq!(pattern.find("não faz frio"), Some(Parts::Word("faz")));
        assert_eq!(pattern.find("não  ."), None);
        assert_eq!(pattern.find("chove"), None);
    }

    #[test]
    fn infix_splits_at_last() {
        let pattern = Pattern::Infix("e");
        assert_eq!(pattern.find("a e b e c"), Some(Parts::Pair("a e b", "c")));
        // Within a word is not an occurrence.
        assert_eq!(pattern.find("frente"), None);
        assert_eq!(pattern.find("e b"), None);
        assert_eq!(pattern.find("a e"), None);
    }

    #[test]
    fn conditional_runs_to_last_link() {
        let pattern = Pattern::Conditional("se", "então");
        assert_eq!(
            pattern.find("se chove então a rua fica molhada"),
            Some(Parts::Pair("chove", "a rua fica molhada"))
        );
        assert_eq!(
            pattern.find("se a então b então c"),
            Some(Parts::Pair("a então b", "c"))
        );
        assert_eq!(pattern.find("se então b"), None);
        assert_eq!(pattern.find("chove então"), None);
    }

    #[test]
    fn normalisation() {
        let translator = Translator::default();
        assert_eq!(translator.normalise_sentence("  Chove! "), "chove");
        assert_eq!(translator.normalise_sentence("chove.."), "chove.");
        assert_eq!(translator.normalise_sentence("chove;"), "chove;");
    }
}
