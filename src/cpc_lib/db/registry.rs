/*!
A registry of propositions and the variables which stand in for them.

The registry maintains a bijection between (normalised) propositions and allocated variables:
- A proposition is normalised by trimming whitespace and converting to lowercase.
- The *n*th distinct proposition seen receives the *n*th variable.
- Once made, a mapping is never revised, and registering a proposition again returns the variable it already has.

The registry only grows.
A fresh registry is obtained with a fresh [translator](crate::translate::Translator).

```rust
# use cpc_lib::config::Config;
# use cpc_lib::db::registry::Registry;
let mut registry = Registry::new(&Config::default());
let chove = registry.obtain_variable("Chove").unwrap();
let frio = registry.obtain_variable("faz frio").unwrap();
assert_eq!(chove.to_string(), "A");
assert_eq!(registry.obtain_variable("  CHOVE ").unwrap(), chove);
assert_eq!(registry.proposition_for("B"), "faz frio");
assert_eq!(registry.proposition_for("Z"), "Z");
```
*/

use std::collections::HashMap;

use crate::{
    config::{defaults, Config, OverflowPolicy},
    misc::log::targets::{self},
    structures::variable::{Variable, LETTER_COUNT, VARIABLE_MAX},
    types::err::RegistryError,
};

pub struct Registry {
    /// Propositions, indexed by the variable which stands in for each.
    external_map: Vec<String>,

    /// Propositions to the variable which stands in for each.
    string_map: HashMap<String, Variable>,

    /// The policy on running past `Z`.
    overflow: OverflowPolicy,
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new(&Config::default())
    }
}

impl Registry {
    pub fn new(config: &Config) -> Self {
        Registry {
            external_map: Vec::with_capacity(defaults::DEFAULT_PROPOSITION_COUNT),
            string_map: HashMap::with_capacity(defaults::DEFAULT_PROPOSITION_COUNT),
            overflow: config.overflow,
        }
    }

    /// The normal form of some proposition.
    pub fn normalise(proposition: &str) -> String {
        proposition.trim().to_lowercase()
    }

    /// The variable of `proposition`, allocating a fresh variable if `proposition` has not been seen.
    pub fn obtain_variable(&mut self, proposition: &str) -> Result<Variable, RegistryError> {
        let the_proposition = Registry::normalise(proposition);

        if let Some(variable) = self.string_map.get(&the_proposition) {
            return Ok(*variable);
        }

        let variable = self.fresh_variable()?;
        log::debug!(target: targets::REGISTRY, "'{the_proposition}' → {variable}");

        self.string_map.insert(the_proposition.clone(), variable);
        self.external_map.push(the_proposition);

        Ok(variable)
    }

    /// The next variable, if one is available under the overflow policy.
    fn fresh_variable(&self) -> Result<Variable, RegistryError> {
        let limit = match self.overflow {
            OverflowPolicy::Extend => VARIABLE_MAX as u64,
            OverflowPolicy::Error => (LETTER_COUNT - 1) as u64,
        };

        match u32::try_from(self.external_map.len()) {
            Ok(index) if (index as u64) <= limit => Ok(Variable::new(index)),
            _ => {
                log::trace!(target: targets::REGISTRY, "Exhausted at {}", self.external_map.len());
                Err(RegistryError::VariablesExhausted)
            }
        }
    }

    /// The variable of `proposition`, if `proposition` has been seen.
    pub fn variable_for(&self, proposition: &str) -> Option<Variable> {
        self.string_map.get(&Registry::normalise(proposition)).copied()
    }

    /// The proposition of `token`, if `token` names an allocated variable, and otherwise `token` as given.
    pub fn proposition_for<'a>(&'a self, token: &'a str) -> &'a str {
        match Variable::from_name(token.trim()) {
            Some(variable) => match self.external_map.get(variable.index() as usize) {
                Some(proposition) => proposition.as_str(),
                None => token,
            },
            None => token,
        }
    }

    /// Every (proposition, variable) pair, in order of allocation.
    pub fn all_mappings(&self) -> impl Iterator<Item = (&str, Variable)> {
        self.external_map
            .iter()
            .enumerate()
            .map(|(index, proposition)| (proposition.as_str(), Variable::new(index as u32)))
    }

    /// A count of allocated variables.
    pub fn len(&self) -> usize {
        self.external_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.external_map.is_empty()
    }
}

impl std::fmt::Display for Registry {
    /// One line per mapping, `'proposition' → variable`, in order of allocation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (proposition, variable) in self.all_mappings() {
            writeln!(f, "'{proposition}' → {variable}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(overflow: OverflowPolicy) -> Registry {
        let config = Config {
            overflow,
            ..Default::default()
        };
        Registry::new(&config)
    }

    #[test]
    fn allocation_order() {
        let mut registry = Registry::default();
        let names = ["chove", "faz frio", "há nuvens"]
            .iter()
            .map(|p| registry.obtain_variable(p).unwrap().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn bijection() {
        let mut registry = Registry::default();
        let a = registry.obtain_variable("chove").unwrap();
        let b = registry.obtain_variable("Faz Frio").unwrap();
        assert_ne!(a, b);
        assert_eq!(registry.obtain_variable(" CHOVE\t").unwrap(), a);
        assert_eq!(registry.obtain_variable("faz frio").unwrap(), b);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.variable_for("FAZ FRIO"), Some(b));
        assert_eq!(registry.variable_for("neva"), None);
    }

    #[test]
    fn reverse_lookup() {
        let mut registry = Registry::default();
        let _ = registry.obtain_variable("chove");
        assert_eq!(registry.proposition_for("A"), "chove");
        assert_eq!(registry.proposition_for(" A "), "chove");
        // Unallocated, or not a variable at all.
        assert_eq!(registry.proposition_for("B"), "B");
        assert_eq!(registry.proposition_for("chove e faz frio"), "chove e faz frio");
    }

    #[test]
    fn mappings_listed_in_order() {
        let mut registry = Registry::default();
        assert!(registry.is_empty());
        for proposition in ["b", "a", "b", "c"] {
            let _ = registry.obtain_variable(proposition);
        }
        let mappings = registry
            .all_mappings()
            .map(|(p, v)| format!("{p}:{v}"))
            .collect::<Vec<_>>();
        assert_eq!(mappings, vec!["b:A", "a:B", "c:C"]);
        assert_eq!(registry.to_string(), "'b' → A\n'a' → B\n'c' → C\n");
    }

    #[test]
    fn overflow_extend() {
        let mut registry = registry_with(OverflowPolicy::Extend);
        for index in 0..LETTER_COUNT {
            let _ = registry.obtain_variable(&format!("p{index}"));
        }
        let next = registry.obtain_variable("one more").unwrap();
        assert_eq!(next.to_string(), "AA");
        assert_eq!(registry.proposition_for("AA"), "one more");
    }

    #[test]
    fn overflow_error() {
        let mut registry = registry_with(OverflowPolicy::Error);
        for index in 0..LETTER_COUNT {
            assert!(registry.obtain_variable(&format!("p{index}")).is_ok());
        }
        assert_eq!(
            registry.obtain_variable("one more"),
            Err(RegistryError::VariablesExhausted)
        );
        // Seen propositions are still fine.
        assert_eq!(registry.obtain_variable("p25").unwrap().to_string(), "Z");
        assert_eq!(registry.len(), LETTER_COUNT as usize);
    }
}
