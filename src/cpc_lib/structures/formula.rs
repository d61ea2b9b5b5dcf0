/*!
Formulas, as trees over [variables](Variable).

A formula is written:
- As the name of its variable, if a variable.
- As `¬` followed by the written operand, if a negation.
- As `(` left connective right `)`, with a single space either side of the connective, otherwise.

```rust
# use cpc_lib::structures::{connective::Connective, formula::Formula, variable::Variable};
let a = Formula::Variable(Variable::new(0));
let b = Formula::Variable(Variable::new(1));
let formula = Formula::binary(Connective::And, Formula::negation(a), b);
assert_eq!(formula.to_string(), "(¬A ∧ B)");
```
*/

use super::{connective::Connective, variable::Variable};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    Variable(Variable),
    Not(Box<Formula>),
    /// A binary connective and its operands.
    ///
    /// The connective is never [Connective::Not].
    Binary(Connective, Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn negation(operand: Formula) -> Self {
        Formula::Not(Box::new(operand))
    }

    /// A binary formula, or a negation of `right` if the connective is [Connective::Not].
    pub fn binary(connective: Connective, left: Formula, right: Formula) -> Self {
        match connective {
            Connective::Not => Formula::negation(right),
            _ => Formula::Binary(connective, Box::new(left), Box::new(right)),
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Variable(variable) => write!(f, "{variable}"),
            Formula::Not(operand) => write!(f, "{}{operand}", Connective::Not),
            Formula::Binary(connective, left, right) => write!(f, "({left} {connective} {right})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(index: u32) -> Formula {
        Formula::Variable(Variable::new(index))
    }

    #[test]
    fn written() {
        assert_eq!(var(2).to_string(), "C");
        assert_eq!(Formula::negation(var(0)).to_string(), "¬A");

        let nested = Formula::binary(
            Connective::Implies,
            Formula::binary(Connective::Or, var(0), var(1)),
            Formula::negation(Formula::negation(var(2))),
        );
        assert_eq!(nested.to_string(), "((A ∨ B) → ¬¬C)");
    }

    #[test]
    fn not_as_binary() {
        assert_eq!(
            Formula::binary(Connective::Not, var(0), var(1)),
            Formula::negation(var(1))
        );
    }
}
