// params.rs — Parameter derivation for outlined callable units.
//
// Given an IET sub-tree, computes the minimal ordered list of symbols its
// outlined form must take as call arguments: every free symbol of the
// sub-tree that is neither bound inside it nor globally visible. The
// differential variant restricts that list to the symbols an enclosing root
// does not already guarantee.
//
// Preconditions: the sub-tree is well-formed (consistent define/use naming).
// Side effects: none; results are recomputed fresh on every call.

use std::collections::{HashMap, HashSet};

use crate::diag::AnalysisError;
use crate::query::{IetQuery, SymbolCategory};
use crate::symbol::{filter_ordered, Symbol, SymbolKind};

/// Derive the input parameters of `iet` by collecting all symbols not
/// defined in the tree itself.
///
/// `drop_locals` additionally removes compiler-generated workspaces (arrays
/// and local objects) from the result.
pub fn derive_parameters<N: IetQuery>(
    iet: &N,
    drop_locals: bool,
) -> Result<Vec<Symbol>, AnalysisError> {
    // Candidates: every referenced symbol, expanded with its free symbols so
    // a flattened view pulls in its hidden strides.
    let mut candidates: Vec<Symbol> = Vec::new();
    for symbol in iet.symbols(SymbolCategory::All) {
        candidates.extend(symbol.free_symbols());
    }

    // Owning entities of higher-level object references become input
    // parameters as well (a field read parameterizes the whole composite).
    candidates.extend(iet.symbols(SymbolCategory::Basics));

    // Both queries can extract the same symbol; keep first occurrences.
    let candidates = filter_ordered(candidates);

    // External names bound within `iet`. One name bound to two structurally
    // different symbols is the aliasing hazard we refuse to resolve by name.
    let mut defines: HashMap<String, Symbol> = HashMap::new();
    for symbol in iet.symbols(SymbolCategory::Defines) {
        let name = symbol.external_name().to_string();
        match defines.get(&name) {
            Some(previous) if *previous != symbol => {
                return Err(AnalysisError::AmbiguousSymbol { name });
            }
            Some(_) => {}
            None => {
                defines.insert(name, symbol);
            }
        }
    }

    let parameters = candidates
        .into_iter()
        .filter(|c| !defines.contains_key(c.external_name()))
        // Globally-visible objects are never real parameters.
        .filter(|c| c.is_parameter_eligible());

    let parameters = if drop_locals {
        parameters.filter(|c| !c.is_compiler_local()).collect()
    } else {
        parameters.collect()
    };

    Ok(parameters)
}

/// Derive the non-constant parameters of `iet`, a sub-tree within `root`:
/// the subset of its parameters whose value can actually change at some
/// point in `root`.
///
/// `indirectly_provided` lists parameters already reachable through another
/// parameter (e.g. fields of a composite in `root`'s signature).
pub fn diff_parameters<N: IetQuery>(
    iet: &N,
    root: &N,
    indirectly_provided: &[Symbol],
) -> Result<Vec<Symbol>, AnalysisError> {
    if !root.contains(iet) {
        return Err(AnalysisError::MalformedTree);
    }

    let required: Vec<Symbol> = derive_parameters(iet, false)?
        .into_iter()
        .filter(|s| !indirectly_provided.contains(s))
        .collect();

    // Everything the root already has: its own parameters, plus required
    // callables whose storage is not externally owned (reachable once the
    // root holds them), plus the symbols all of those entities bind.
    let mut known: HashSet<Symbol> = root.parameters().into_iter().collect();
    known.extend(
        required
            .iter()
            .filter(|s| {
                matches!(
                    s.kind,
                    SymbolKind::Callable {
                        mem_external: false,
                        ..
                    }
                )
            })
            .cloned(),
    );
    let bound: Vec<Symbol> = known.iter().flat_map(|s| s.bound_symbols()).collect();
    known.extend(bound);

    Ok(required.into_iter().filter(|s| !known.contains(s)).collect())
}
