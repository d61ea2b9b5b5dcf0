//! A library for translating between short Portuguese sentences and formulas of classical propositional logic.
//!
//! Sentences such as "se chove então a rua fica molhada" are read as formulas such as `(A → B)`, and formulas are read back as sentences, e.g. "chove implica a rua fica molhada".
//!
//! # Orientation
//!
//! The library is designed around a [translator](translate::Translator), which owns a [registry](db::registry) of propositions and the variables which stand for them.
//!
//! - [Sentences are read](translate::sentence) by a fixed sequence of shallow recognizers for the connectives "não", "se … então …", "e", "ou", and "se e somente se".
//!   Each atomic proposition is given a variable by the registry, `A`, `B`, `C`, … in order of appearance.
//! - [Formulas are read](translate::formula) by resolving parenthesised groups innermost first, and then operators in a fixed order, with variables replaced by their propositions.
//! - The [structures] to familiarise yourself with connectives, variables, and formulas.
//! - The [configuration](config) to see what may be adjusted.
//!
//! Recognition is not semantic, and order matters.
//! And, the words of a sentence are not preserved by a round trip, only its logical shape: "se … então …" returns as "… implica …".
//!
//! # Examples
//!
//! ```rust
//! # use cpc_lib::translate::Translator;
//! let mut translator = Translator::default();
//!
//! let formula = translator.translate_to_formula("Chove e faz frio.").unwrap();
//! assert_eq!(formula.to_string(), "(A ∧ B)");
//!
//! assert_eq!(translator.translate_to_text("¬A ∨ B").unwrap(), "não chove ou faz frio");
//!
//! let mappings = translator.all_mappings().collect::<Vec<_>>();
//! assert_eq!(mappings.len(), 2);
//! assert_eq!(mappings[1].0, "faz frio");
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made on the targets listed in [misc::log], and no logger is installed by the library.

pub mod config;
pub mod db;
pub mod misc;
pub mod structures;
pub mod translate;
pub mod types;
