// symbol.rs — Symbol classification model for capture analysis.
//
// Every named entity in the IET carries a `Symbol` telling parameter
// derivation what it denotes: plain runtime value, struct-backed composite,
// flattened array view with hidden strides, global constant, and so on.
// Symbols are immutable value objects; identity is structural (kind plus
// construction parameters), never name alone.
//
// Preconditions: none (types only).
// Side effects: none.

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::dtype::DType;

// ── Symbol ──────────────────────────────────────────────────────────────────

/// A named entity of the IET, annotated with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
}

/// Classification of a symbol. Parameter-derivation policy is a pure
/// function of this tag — see `is_parameter_eligible` / `is_compiler_local`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    /// Plain runtime scalar.
    Scalar { dtype: DType },
    /// Runtime array, including compiler-generated workspaces.
    Array { dtype: DType },
    /// Struct-backed aggregate with named fields. The composite owns its
    /// fields: referencing a field parameterizes the whole object, never the
    /// field on its own.
    Composite {
        /// Struct tag in the generated code (e.g. `profiler`).
        type_name: String,
        fields: Vec<(String, DType)>,
    },
    /// A multidimensional access re-expressed as one flat pointer plus
    /// explicit strides. The strides are read by the generated address
    /// arithmetic, so they are free symbols of the view even though the
    /// functional representation hides them.
    Flattened {
        /// The multidimensional array being accessed.
        base: Box<Symbol>,
        /// Access indices, outermost first.
        indices: Vec<Symbol>,
        /// Name of the flat pointer in the generated code.
        flat_name: String,
        strides: Vec<Symbol>,
    },
    /// Raw address-typed symbol. `pointee` drives downstream ABI mapping;
    /// a `Void` pointee maps to the generic address type.
    Pointer { pointee: DType },
    /// Process-visible constant or singleton. Never a parameter.
    Global { dtype: DType },
    /// Reserved language/runtime identifier. Never a parameter.
    Keyword,
    /// Compiler-injected literal. Never a parameter.
    Macro,
    /// Another callable unit referenced by value. `bound` lists the symbols
    /// it defines and owns (e.g. loop-local dimensions); `mem_external` means
    /// its backing storage is owned outside the scope being analyzed.
    Callable { bound: Vec<Symbol>, mem_external: bool },
    /// Compiler-internal helper object (temporaries, workaround symbols).
    Local { dtype: DType },
}

impl SymbolKind {
    /// Whether a symbol of this kind may appear in a derived signature.
    /// Globally-visible entities never do.
    pub fn is_parameter_eligible(&self) -> bool {
        !matches!(
            self,
            SymbolKind::Global { .. } | SymbolKind::Keyword | SymbolKind::Macro
        )
    }

    /// Whether `drop_locals` removes symbols of this kind. Arrays and local
    /// objects are dropped together, matching the observed behavior of the
    /// flag.
    pub fn is_compiler_local(&self) -> bool {
        matches!(self, SymbolKind::Array { .. } | SymbolKind::Local { .. })
    }
}

impl Symbol {
    pub fn scalar(name: impl Into<String>, dtype: DType) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Scalar { dtype },
        }
    }

    pub fn array(name: impl Into<String>, dtype: DType) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Array { dtype },
        }
    }

    pub fn composite(
        name: impl Into<String>,
        type_name: impl Into<String>,
        fields: Vec<(String, DType)>,
    ) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Composite {
                type_name: type_name.into(),
                fields,
            },
        }
    }

    /// Profiling-timer composite: one `Double` field per named section.
    pub fn timer(name: impl Into<String>, sections: &[&str]) -> Self {
        let fields = sections
            .iter()
            .map(|s| (s.to_string(), DType::Double))
            .collect();
        Symbol::composite(name, "profiler", fields)
    }

    /// Flattened view over `base`, accessed at `indices`, emitted under
    /// `flat_name` with the given strides. The view's name is the base's.
    pub fn flattened(
        base: Symbol,
        indices: Vec<Symbol>,
        flat_name: impl Into<String>,
        strides: Vec<Symbol>,
    ) -> Self {
        Symbol {
            name: base.name.clone(),
            kind: SymbolKind::Flattened {
                base: Box::new(base),
                indices,
                flat_name: flat_name.into(),
                strides,
            },
        }
    }

    pub fn pointer(name: impl Into<String>, pointee: DType) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Pointer { pointee },
        }
    }

    pub fn global(name: impl Into<String>, dtype: DType) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Global { dtype },
        }
    }

    pub fn keyword(name: impl Into<String>) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Keyword,
        }
    }

    pub fn macro_(name: impl Into<String>) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Macro,
        }
    }

    pub fn callable(name: impl Into<String>, bound: Vec<Symbol>, mem_external: bool) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Callable {
                bound,
                mem_external,
            },
        }
    }

    pub fn local(name: impl Into<String>, dtype: DType) -> Self {
        Symbol {
            name: name.into(),
            kind: SymbolKind::Local { dtype },
        }
    }

    /// Name the symbol carries in generated code. Differs from `name` for
    /// flattened views, which are emitted under their flat pointer name.
    pub fn external_name(&self) -> &str {
        match &self.kind {
            SymbolKind::Flattened { flat_name, .. } => flat_name,
            _ => &self.name,
        }
    }

    /// Symbols this entity's definition depends on, in deterministic order.
    /// Ordinary symbols depend on themselves alone; a flattened view also
    /// reads its strides during address computation.
    pub fn free_symbols(&self) -> Vec<Symbol> {
        let mut free = vec![self.clone()];
        if let SymbolKind::Flattened { strides, .. } = &self.kind {
            for stride in strides {
                free.extend(stride.free_symbols());
            }
        }
        filter_ordered(free)
    }

    /// Symbols owned/declared by this entity, inherited into the "known" set
    /// of any scope that already has it.
    pub fn bound_symbols(&self) -> Vec<Symbol> {
        match &self.kind {
            SymbolKind::Callable { bound, .. } => bound.clone(),
            SymbolKind::Composite { fields, .. } => fields
                .iter()
                .map(|(name, dtype)| Symbol::scalar(name.clone(), *dtype))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Dimension-defining set of this symbol.
    pub fn defines(&self) -> Vec<Symbol> {
        vec![self.clone()]
    }

    /// C type of this symbol's value, for downstream ABI mapping. Entities
    /// with no value type (keywords, macros, callables) yield `None`.
    pub fn c_type(&self) -> Option<String> {
        match &self.kind {
            SymbolKind::Scalar { dtype }
            | SymbolKind::Global { dtype }
            | SymbolKind::Local { dtype } => Some(dtype.c_name().to_string()),
            SymbolKind::Array { dtype } => Some(format!("{}*", dtype.c_name())),
            SymbolKind::Composite { type_name, .. } => Some(format!("struct {}*", type_name)),
            SymbolKind::Flattened { base, .. } => base.c_type(),
            // A void pointee is a generic address, not an arithmetic type.
            SymbolKind::Pointer {
                pointee: DType::Void,
            } => Some("void*".to_string()),
            SymbolKind::Pointer { pointee } => Some(format!("{}*", pointee.c_name())),
            SymbolKind::Keyword | SymbolKind::Macro | SymbolKind::Callable { .. } => None,
        }
    }

    pub fn is_parameter_eligible(&self) -> bool {
        self.kind.is_parameter_eligible()
    }

    pub fn is_compiler_local(&self) -> bool {
        self.kind.is_compiler_local()
    }
}

// ── Hyperplane ──────────────────────────────────────────────────────────────

/// An ordered, deduplicated tuple of dimension symbols spanning a hyperplane
/// of the iteration space. Not consumed by parameter derivation; its only
/// derived attribute is the union of its members' defines-sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hyperplane(Vec<Symbol>);

impl Hyperplane {
    pub fn new(dimensions: impl IntoIterator<Item = Symbol>) -> Self {
        Hyperplane(filter_ordered(dimensions.into_iter().collect()))
    }

    pub fn members(&self) -> &[Symbol] {
        &self.0
    }

    pub fn defines(&self) -> Vec<Symbol> {
        filter_ordered(self.0.iter().flat_map(|d| d.defines()).collect())
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────────

/// Deduplicate preserving first-occurrence order.
pub(crate) fn filter_ordered<T: Eq + Hash + Clone>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
