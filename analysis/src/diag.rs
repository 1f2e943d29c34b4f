// diag.rs — Errors surfaced by capture analysis.
//
// Well-formed IETs never produce these: both variants are precondition
// violations of the IR builder, surfaced here instead of being silently
// worked around.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The sub-tree handed to `diff_parameters` is not reachable from the
    /// root it was claimed to be extracted from.
    MalformedTree,
    /// Two structurally distinct symbols bound in the same sub-tree share an
    /// external name. Resolving the collision by name alone would alias them
    /// in the generated code.
    AmbiguousSymbol { name: String },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::MalformedTree => {
                write!(f, "sub-tree is not reachable from its claimed root")
            }
            AnalysisError::AmbiguousSymbol { name } => {
                write!(f, "external name `{}` is bound to two distinct symbols", name)
            }
        }
    }
}

impl Error for AnalysisError {}
