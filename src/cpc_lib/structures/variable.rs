/*!
(The representation of) a propositional variable.

Internally a variable is a u32 *u*, allocated in order from 0.
Externally, a variable is written as a name of uppercase letters:
- `A` through `Z` for 0 through 25, and then
- `AA`, `AB`, … `ZZ`, `AAA`, … as in the column names of a spreadsheet (bijective base 26).

```rust
# use cpc_lib::structures::variable::Variable;
assert_eq!(Variable::new(0).to_string(), "A");
assert_eq!(Variable::new(26).to_string(), "AA");
assert_eq!(Variable::from_name("AB"), Some(Variable::new(27)));
```

Whether a registry ever allocates past `Z` depends on its [overflow policy](crate::config::OverflowPolicy).
*/

/// The number of single letter variables.
pub const LETTER_COUNT: u32 = 26;

/// The maximum instance of a variable.
pub const VARIABLE_MAX: u32 = u32::MAX;

/// A propositional variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(u32);

impl Variable {
    pub fn new(index: u32) -> Self {
        Variable(index)
    }

    /// The index of the variable, in order of allocation.
    pub fn index(&self) -> u32 {
        self.0
    }

    /// The variable written as `name`, if `name` is a variable name.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }

        let mut value: u64 = 0;
        for byte in name.bytes() {
            if !byte.is_ascii_uppercase() {
                return None;
            }
            let digit = (byte - b'A' + 1) as u64;
            value = value.checked_mul(LETTER_COUNT as u64)?.checked_add(digit)?;
            if value - 1 > VARIABLE_MAX as u64 {
                return None;
            }
        }

        Some(Variable((value - 1) as u32))
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut remaining = self.0 as u64 + 1;
        let mut letters = Vec::with_capacity(7);
        while remaining > 0 {
            remaining -= 1;
            letters.push((b'A' + (remaining % LETTER_COUNT as u64) as u8) as char);
            remaining /= LETTER_COUNT as u64;
        }
        letters.reverse();
        f.write_str(&letters.into_iter().collect::<String>())
    }
}
