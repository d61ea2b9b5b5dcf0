/*!
The abstract elements of a translation.

- [Connectives](connective), with the tables relating them to natural language.
- [Variables](variable), which stand in for propositions.
- [Formulas](formula), trees of connectives over variables.
*/

pub mod connective;
pub mod formula;
pub mod variable;
