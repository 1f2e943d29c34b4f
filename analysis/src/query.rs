// query.rs — Contract consumed from the IR tree implementation.
//
// The IET itself — node kinds, children, construction — lives in the host
// compiler. This layer only inspects it, through the read-only surface below.

use crate::symbol::Symbol;

/// Which symbol population to retrieve from a sub-tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolCategory {
    /// Every symbol referenced anywhere in the sub-tree.
    All,
    /// Owning entities of higher-level object references: a read of one
    /// composite field contributes the whole composite.
    Basics,
    /// Symbols bound inside the sub-tree (loop indices, local declarations).
    Defines,
}

/// Read-only query surface every IET node must provide.
///
/// Results are recomputed on every call; implementations must not cache them
/// across calls, since the inspected sub-trees may differ per invocation.
pub trait IetQuery {
    /// Symbols of the given category, in document order.
    fn symbols(&self, category: SymbolCategory) -> Vec<Symbol>;

    /// Maximal loop-nest paths under this node, in discovery (document)
    /// order. Each path is an ordered sequence of nested loop nodes,
    /// outermost first.
    fn sections(&self) -> Vec<Vec<&Self>>;

    /// Declared parameter list, for callable-like nodes. Empty otherwise.
    fn parameters(&self) -> Vec<Symbol>;

    /// Whether `node` is reachable from this node, by node identity.
    fn contains(&self, node: &Self) -> bool;
}
