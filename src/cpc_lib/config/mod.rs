/*!
Configuration of a [translator](crate::translate::Translator).

All configuration for a translator is contained within a [Config].
The [registry](crate::db::registry) keeps a copy of the options relevant to it.
*/
pub mod defaults;

/// What to do once the single letters `A`..`Z` have all been allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Continue with multi-letter names, `AA`, `AB`, … `ZZ`, `AAA`, …
    Extend,

    /// Refuse to allocate past `Z`.
    Error,
}

impl std::fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extend => write!(f, "extend"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Policy for variables past `Z`.
    pub overflow: OverflowPolicy,

    /// The deepest recursion permitted when splitting a sentence.
    pub max_depth: usize,

    /// Characters which, if ending a sentence, are removed before recognition.
    pub terminators: Vec<char>,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            overflow: OVERFLOW_POLICY,
            max_depth: MAX_DEPTH,
            terminators: TERMINATORS.to_vec(),
        }
    }
}
