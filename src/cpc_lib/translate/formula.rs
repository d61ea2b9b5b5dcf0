/*!
Translation of formulas to sentences.

Whitespace is removed from a formula, and the remainder is read as a sequence of tokens:
- Each of the five connective symbols.
- Opening and closing parentheses.
- Operands, maximal runs of any other characters.

The translation proceeds in two phases.

1. Parenthesised groups are resolved innermost first.
   The tokens of a group are resolved as in phase 2, and the group is replaced by a single resolved operand.
   A group may only be resolved if it is closed, non-empty, and contains no parenthesis which could not be matched.
   Parentheses which could not be matched are kept as text, and join whatever operand they are next to.
2. The remaining flat sequence is resolved by rewriting each operator in turn, in [display precedence](DISPLAY_PRECEDENCE).
   For each operator, the leftmost occurrence with an operand on each side (only on the right, for ¬) is rewritten as `left word right` (`não right`, for ¬), and this repeats until no occurrence remains.
   The pass over all five operators repeats until a pass rewrites nothing, as a negation may unblock an earlier operator (`A→¬B`).
   A negation with an operand directly on its left (`A¬B`) joins that operand, separated by a space.

Operands which are tokens of the input are looked up in the registry, so a variable is replaced by its proposition.
Resolved text is never looked up nor read again, so resolved text never introduces an operator or a variable.

Malformed formulas (e.g. unbalanced parentheses) are translated as far as possible, and not rejected.
The nesting of groups is unbounded.

```rust
# use cpc_lib::translate::Translator;
let mut translator = Translator::default();
translator.translate_to_formula("chove e faz frio").unwrap();
assert_eq!(translator.translate_to_text("(A ∧ B)").unwrap(), "chove e faz frio");
assert_eq!(translator.translate_to_text("¬(A ∨ B)").unwrap(), "não chove ou faz frio");
assert_eq!(translator.translate_to_text("(A ∧ B").unwrap(), "(chove e faz frio");
```
*/

use crate::{
    misc::log::targets::{self},
    structures::connective::{Connective, DISPLAY_PRECEDENCE},
    types::err::{ErrorCause, TranslationError},
};

use super::Translator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token<'f> {
    Open,
    Close,
    Operator(Connective),
    Operand(&'f str),
}

/// Reads a formula, free of whitespace, as a sequence of tokens.
fn tokenize(formula: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::default();
    let mut run_start: Option<usize> = None;

    for (index, character) in formula.char_indices() {
        let token = match character {
            '(' => Token::Open,
            ')' => Token::Close,
            _ => match Connective::from_symbol(character) {
                Some(connective) => Token::Operator(connective),
                None => {
                    run_start.get_or_insert(index);
                    continue;
                }
            },
        };

        if let Some(start) = run_start.take() {
            tokens.push(Token::Operand(&formula[start..index]));
        }
        tokens.push(token);
    }

    if let Some(start) = run_start {
        tokens.push(Token::Operand(&formula[start..]));
    }

    tokens
}

#[derive(Debug)]
struct Operand {
    text: String,
    /// Whether the text is a token of the input, and so may be looked up.
    raw: bool,
}

impl Operand {
    fn raw(text: &str) -> Self {
        Operand {
            text: text.to_string(),
            raw: true,
        }
    }

    fn resolved(text: String) -> Self {
        Operand { text, raw: false }
    }
}

#[derive(Debug)]
enum Piece {
    Operator(Connective),
    Operand(Operand),
    /// A parenthesis which is not part of any resolvable group.
    Literal(char),
}

/// The index of the leftmost operator `connective` which has the operands it requires.
fn find_application(pieces: &[Piece], connective: Connective) -> Option<usize> {
    let is_operand = |index: usize| matches!(pieces.get(index), Some(Piece::Operand(_)));

    (0..pieces.len()).find(|&index| {
        matches!(pieces[index], Piece::Operator(c) if c == connective)
            && is_operand(index + 1)
            && (connective.is_unary() || (index > 0 && is_operand(index - 1)))
    })
}

impl Translator {
    /// Translates a formula to a sentence, using the propositions of the registry for variables.
    ///
    /// ```rust
    /// # use cpc_lib::translate::Translator;
    /// let mut translator = Translator::default();
    /// translator.translate_to_formula("chove").unwrap();
    /// assert_eq!(translator.translate_to_text("¬A").unwrap(), "não chove");
    /// ```
    pub fn translate_to_text(&self, formula: &str) -> Result<String, TranslationError> {
        log::trace!(target: targets::FORMULA, "Translating: {formula}");

        let compact = formula
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();
        if compact.is_empty() {
            return Err(TranslationError::from(ErrorCause::EmptyFormula));
        }

        // The pieces of the innermost open group, and those of each group enclosing it.
        let mut current: Vec<Piece> = Vec::default();
        let mut enclosing: Vec<Vec<Piece>> = Vec::default();

        for token in tokenize(&compact) {
            match token {
                Token::Open => enclosing.push(std::mem::take(&mut current)),

                Token::Close => match enclosing.pop() {
                    None => current.push(Piece::Literal(')')),
                    Some(parent) => {
                        let group = std::mem::replace(&mut current, parent);
                        let closed = self.close_group(group);
                        current.extend(closed);
                    }
                },

                Token::Operator(connective) => current.push(Piece::Operator(connective)),

                Token::Operand(text) => current.push(Piece::Operand(Operand::raw(text))),
            }
        }

        // Any group still open was never closed.
        while let Some(mut parent) = enclosing.pop() {
            log::trace!(target: targets::FORMULA, "Unclosed group");
            parent.push(Piece::Literal('('));
            parent.append(&mut current);
            current = parent;
        }

        let text = self.resolve_flat(current);
        log::debug!(target: targets::FORMULA, "{formula} ⇒ {text}");
        Ok(text)
    }

    /// The pieces to take the place of a closed group in the enclosing group.
    fn close_group(&self, group: Vec<Piece>) -> Vec<Piece> {
        let resolvable =
            !group.is_empty() && !group.iter().any(|piece| matches!(piece, Piece::Literal(_)));

        if resolvable {
            vec![Piece::Operand(Operand::resolved(self.resolve_flat(group)))]
        } else {
            log::trace!(target: targets::FORMULA, "Unresolvable group");
            let mut pieces = Vec::with_capacity(group.len() + 2);
            pieces.push(Piece::Literal('('));
            pieces.extend(group);
            pieces.push(Piece::Literal(')'));
            pieces
        }
    }

    /// Resolves a sequence of pieces free of groups, by rewriting each operator in display precedence.
    ///
    /// Passes over the precedence repeat until a pass rewrites nothing.
    /// So, an operator blocked by a negation on its right (e.g. `A→¬B`) is rewritten after the negation.
    fn resolve_flat(&self, pieces: Vec<Piece>) -> String {
        let mut pieces = self.merge_operands(pieces);

        let mut rewritten = true;
        while rewritten {
            rewritten = false;
            for connective in DISPLAY_PRECEDENCE {
                while let Some(index) = find_application(&pieces, connective) {
                    rewritten = true;
                    pieces = self.apply(pieces, index, connective);
                }
            }
        }

        pieces.iter().map(|piece| self.piece_text(piece)).collect()
    }

    /// Rewrites the application of `connective` at `index` as a single resolved operand.
    fn apply(&self, mut pieces: Vec<Piece>, index: usize, connective: Connective) -> Vec<Piece> {
        let right = pieces.remove(index + 1);

        if connective.is_unary() {
            let text = format!("{} {}", connective.word(), self.piece_text(&right));
            pieces.remove(index);
            // An operand on the left joins the rewrite, separated by a space.
            let left = index
                .checked_sub(1)
                .filter(|&left| matches!(pieces[left], Piece::Operand(_)));
            match left {
                Some(left) => {
                    let joined = format!("{} {text}", self.piece_text(&pieces[left]));
                    pieces[left] = Piece::Operand(Operand::resolved(joined));
                }
                None => pieces.insert(index, Piece::Operand(Operand::resolved(text))),
            }
            return pieces;
        }

        pieces.remove(index);
        let text = format!(
            "{} {} {}",
            self.piece_text(&pieces[index - 1]),
            connective.word(),
            self.piece_text(&right)
        );
        pieces[index - 1] = Piece::Operand(Operand::resolved(text));
        pieces
    }

    /// Joins each maximal run of operands (and parentheses kept as text) into a single operand.
    fn merge_operands(&self, pieces: Vec<Piece>) -> Vec<Piece> {
        let mut merged = Vec::with_capacity(pieces.len());
        let mut run: Vec<Piece> = Vec::default();

        for piece in pieces {
            match piece {
                Piece::Operator(_) => {
                    self.flush_run(&mut run, &mut merged);
                    merged.push(piece);
                }
                _ => run.push(piece),
            }
        }
        self.flush_run(&mut run, &mut merged);

        merged
    }

    fn flush_run(&self, run: &mut Vec<Piece>, into: &mut Vec<Piece>) {
        let run = std::mem::take(run);
        let single_operand = matches!(run.as_slice(), [Piece::Operand(_)]);

        if single_operand {
            into.extend(run);
        } else if !run.is_empty() {
            let text = run.iter().map(|piece| self.piece_text(piece)).collect::<String>();
            into.push(Piece::Operand(Operand::resolved(text)));
        }
    }

    /// The text of a piece, with the lookup of any raw operand.
    fn piece_text<'a>(&'a self, piece: &'a Piece) -> std::borrow::Cow<'a, str> {
        use std::borrow::Cow;
        match piece {
            Piece::Operand(Operand { text, raw: true }) => {
                Cow::Borrowed(self.registry.proposition_for(text))
            }
            Piece::Operand(Operand { text, raw: false }) => Cow::Borrowed(text.as_str()),
            Piece::Operator(connective) => Cow::Owned(connective.symbol().to_string()),
            Piece::Literal(parenthesis) => Cow::Owned(parenthesis.to_string()),
        }
    }
}
