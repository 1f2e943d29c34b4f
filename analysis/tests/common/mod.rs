// Minimal in-memory IET used by the integration tests. The real tree lives
// in the host compiler; this fixture implements just enough of `IetQuery`
// to exercise the analysis.

#![allow(dead_code)]

use ietc::query::{IetQuery, SymbolCategory};
use ietc::symbol::Symbol;

#[derive(Debug, Clone)]
pub enum Node {
    /// Loop binding `index` over its body.
    Iteration { index: Symbol, body: Vec<Node> },
    /// Straight-line statement: `reads` are referenced symbols, `owners` the
    /// higher-level objects reached through them (basics), `declares` the
    /// symbols it binds locally.
    Expr {
        reads: Vec<Symbol>,
        owners: Vec<Symbol>,
        declares: Vec<Symbol>,
    },
    /// Control-flow branch; terminates the enclosing loop nest.
    Conditional { body: Vec<Node> },
    /// Statement sequence.
    Block(Vec<Node>),
    /// Callable root with a declared signature.
    Callable {
        parameters: Vec<Symbol>,
        body: Vec<Node>,
    },
}

pub fn iteration(index: Symbol, body: Vec<Node>) -> Node {
    Node::Iteration { index, body }
}

pub fn expr(reads: Vec<Symbol>) -> Node {
    Node::Expr {
        reads,
        owners: Vec::new(),
        declares: Vec::new(),
    }
}

pub fn expr_with(reads: Vec<Symbol>, owners: Vec<Symbol>, declares: Vec<Symbol>) -> Node {
    Node::Expr {
        reads,
        owners,
        declares,
    }
}

pub fn conditional(body: Vec<Node>) -> Node {
    Node::Conditional { body }
}

pub fn block(body: Vec<Node>) -> Node {
    Node::Block(body)
}

pub fn callable(parameters: Vec<Symbol>, body: Vec<Node>) -> Node {
    Node::Callable { parameters, body }
}

/// Body of a `Callable` node; panics on anything else.
pub fn callable_body(node: &Node) -> &[Node] {
    match node {
        Node::Callable { body, .. } => body,
        other => panic!("expected callable, got {:?}", other),
    }
}

impl Node {
    fn children(&self) -> &[Node] {
        match self {
            Node::Iteration { body, .. } => body,
            Node::Conditional { body } => body,
            Node::Block(body) => body,
            Node::Callable { body, .. } => body,
            Node::Expr { .. } => &[],
        }
    }
}

impl IetQuery for Node {
    fn symbols(&self, category: SymbolCategory) -> Vec<Symbol> {
        let mut out = Vec::new();
        collect_symbols(self, category, &mut out);
        out
    }

    fn sections(&self) -> Vec<Vec<&Self>> {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        collect_sections(self, &mut stack, &mut out);
        dedup_sections(out)
    }

    fn parameters(&self) -> Vec<Symbol> {
        match self {
            Node::Callable { parameters, .. } => parameters.clone(),
            _ => Vec::new(),
        }
    }

    fn contains(&self, node: &Self) -> bool {
        std::ptr::eq(self, node) || self.children().iter().any(|c| c.contains(node))
    }
}

fn collect_symbols(node: &Node, category: SymbolCategory, out: &mut Vec<Symbol>) {
    match node {
        Node::Iteration { index, body } => {
            match category {
                SymbolCategory::All | SymbolCategory::Defines => out.push(index.clone()),
                SymbolCategory::Basics => {}
            }
            for child in body {
                collect_symbols(child, category, out);
            }
        }
        Node::Expr {
            reads,
            owners,
            declares,
        } => match category {
            SymbolCategory::All => {
                out.extend(reads.iter().cloned());
                out.extend(declares.iter().cloned());
            }
            SymbolCategory::Basics => out.extend(owners.iter().cloned()),
            SymbolCategory::Defines => out.extend(declares.iter().cloned()),
        },
        other => {
            for child in other.children() {
                collect_symbols(child, category, out);
            }
        }
    }
}

fn collect_sections<'a>(node: &'a Node, stack: &mut Vec<&'a Node>, out: &mut Vec<Vec<&'a Node>>) {
    match node {
        Node::Iteration { body, .. } => {
            stack.push(node);
            let has_loop_child = body.iter().any(|c| matches!(c, Node::Iteration { .. }));
            if !has_loop_child {
                out.push(stack.clone());
            }
            for child in body {
                collect_sections(child, stack, out);
            }
            stack.pop();
        }
        Node::Conditional { body } => {
            // The nest built so far ends at the branch.
            if !stack.is_empty() {
                out.push(stack.clone());
            }
            for child in body {
                collect_sections(child, stack, out);
            }
        }
        Node::Expr { .. } => {}
        other => {
            for child in other.children() {
                collect_sections(child, stack, out);
            }
        }
    }
}

fn dedup_sections<'a>(sections: Vec<Vec<&'a Node>>) -> Vec<Vec<&'a Node>> {
    let mut seen = std::collections::HashSet::new();
    sections
        .into_iter()
        .filter(|s| {
            let key: Vec<usize> = s.iter().map(|n| *n as *const Node as usize).collect();
            seen.insert(key)
        })
        .collect()
}
