/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, mostly at `trace` and `debug` level.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [registry](crate::db::registry)
    pub const REGISTRY: &str = "registry";

    /// Logs related to [sentence translation](crate::translate::sentence)
    pub const SENTENCE: &str = "sentence";

    /// Logs related to [formula translation](crate::translate::formula)
    pub const FORMULA: &str = "formula";
}
