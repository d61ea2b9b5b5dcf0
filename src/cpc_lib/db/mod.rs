/*!
Databases of a translation session.

At present, the only database is the [registry], relating propositions and variables.
*/

pub mod registry;
