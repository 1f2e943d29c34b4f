// ietc — IET capture analysis
//
// Library root. Classifies the symbols of an Iteration/Expression tree and
// derives the call signature of any sub-tree outlined into its own callable
// unit. Invoked by the surrounding compiler pipeline; carries no CLI surface.

pub mod diag;
pub mod dtype;
pub mod iteration;
pub mod params;
pub mod query;
pub mod symbol;
