/*!
The five connectives of classical propositional logic, and their tables.

Two static tables relate connectives to natural language:
- [PHRASES], many phrases to one connective, consulted when reading sentences.
- [Connective::word], one canonical phrase per connective, used when writing sentences.

The tables are not inverse to one another.
For example, both "então" and "implica" are read as [Connective::Implies], though only "implica" is ever written.
So, a sentence translated to a formula and back keeps its logical shape but not (necessarily) its wording.

```rust
# use cpc_lib::structures::connective::Connective;
assert_eq!(Connective::from_phrase("então"), Some(Connective::Implies));
assert_eq!(Connective::Implies.word(), "implica");
```
*/

/// A connective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connective {
    /// ¬
    Not,

    /// ∧
    And,

    /// ∨
    Or,

    /// →
    Implies,

    /// ↔
    Iff,
}

/// Natural language phrases and the connective each is read as.
pub static PHRASES: [(&str, Connective); 8] = [
    ("e", Connective::And),
    ("ou", Connective::Or),
    ("não", Connective::Not),
    ("se", Connective::Implies),
    ("se e somente se", Connective::Iff),
    ("então", Connective::Implies),
    ("implica", Connective::Implies),
    ("equivale", Connective::Iff),
];

/// The order in which operators of a flat formula are rewritten, widest scope first.
///
/// This is an order of display, and not of logical binding.
pub static DISPLAY_PRECEDENCE: [Connective; 5] = [
    Connective::Iff,
    Connective::Implies,
    Connective::Or,
    Connective::And,
    Connective::Not,
];

impl Connective {
    /// The symbol of the connective.
    pub fn symbol(&self) -> char {
        match self {
            Self::Not => '¬',
            Self::And => '∧',
            Self::Or => '∨',
            Self::Implies => '→',
            Self::Iff => '↔',
        }
    }

    /// The canonical natural language phrase for the connective.
    pub fn word(&self) -> &'static str {
        match self {
            Self::Not => "não",
            Self::And => "e",
            Self::Or => "ou",
            Self::Implies => "implica",
            Self::Iff => "se e somente se",
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '¬' => Some(Self::Not),
            '∧' => Some(Self::And),
            '∨' => Some(Self::Or),
            '→' => Some(Self::Implies),
            '↔' => Some(Self::Iff),
            _ => None,
        }
    }

    /// The connective a phrase is read as, if any.
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        PHRASES
            .iter()
            .find(|(p, _)| *p == phrase)
            .map(|(_, connective)| *connective)
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, Self::Not)
    }
}

impl std::fmt::Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
