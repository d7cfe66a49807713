//! Rendering of an AST to pattern text.
//!
//! Rendering recurses once per level of container nesting, so the stack depth
//! is bounded by how deeply the input nests groups. That is fine for
//! hand-written patterns but is not guarded against adversarial input.

use super::{
    ast::{Anchor, AstNode},
    charset::{CharSet, SetItem},
    flags::Flags,
};
use std::fmt::Write as _;

/// Renders a sequence of nodes as pattern text.
#[must_use]
pub fn pattern(nodes: &[AstNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

/// Wraps rendered pattern text and flags as a `/pattern/flags` literal.
#[must_use]
pub fn regex_string(pattern: &str, flags: Flags) -> String {
    format!("/{pattern}/{flags}")
}

fn write_children(out: &mut String, open: &str, children: &[AstNode]) {
    out.push_str(open);
    for child in children {
        write_node(out, child);
    }
    out.push(')');
}

fn write_node(out: &mut String, node: &AstNode) {
    match node {
        AstNode::Noop => {}
        AstNode::Anchor(Anchor::Start) => out.push('^'),
        AstNode::Anchor(Anchor::End) => out.push('$'),
        AstNode::Class(kind) => out.push_str(kind.as_pattern()),
        AstNode::Char(lit) | AstNode::String(lit) => out.push_str(lit.escaped()),
        AstNode::Set(set) => write_set(out, set),
        AstNode::Range(from, to) => {
            let _ = write!(out, "[{from}-{to}]");
        }
        AstNode::AnythingButRange(from, to) => {
            let _ = write!(out, "[^{from}-{to}]");
        }
        AstNode::AnyOfChars(lit) => {
            let _ = write!(out, "[{}]", lit.escaped());
        }
        AstNode::AnythingButChars(lit) => {
            let _ = write!(out, "[^{}]", lit.escaped());
        }
        AstNode::AnythingButString(chars) => {
            out.push_str("(?:");
            for lit in chars {
                let _ = write!(out, "[^{}]", lit.escaped());
            }
            out.push(')');
        }
        AstNode::Group {
            capturing: true,
            children,
        } => write_children(out, "(", children),
        AstNode::Group {
            capturing: false,
            children,
        } => write_children(out, "(?:", children),
        AstNode::NamedGroup { name, children } => {
            write_children(out, &format!("(?<{name}>"), children);
        }
        AstNode::Assertion { kind, children } => write_children(out, kind.opener(), children),
        AstNode::AnyOf(children) => write_any_of(out, children),
        AstNode::Subexpression(children) => {
            for child in children {
                write_node(out, child);
            }
        }
        AstNode::Backreference(index) => {
            let _ = write!(out, "\\{index}");
        }
        AstNode::NamedBackreference(name) => {
            let _ = write!(out, "\\k<{name}>");
        }
        AstNode::Quantified { inner, quantifier } => {
            if inner.needs_group() {
                out.push_str("(?:");
                write_node(out, inner);
                out.push(')');
            } else {
                write_node(out, inner);
            }
            out.push_str(&quantifier.suffix());
        }
    }
}

fn write_set(out: &mut String, set: &CharSet) {
    out.push('[');
    if set.is_negated() {
        out.push('^');
    }
    for item in set.items() {
        match item {
            SetItem::Char(lit) => out.push_str(lit.escaped()),
            SetItem::Range(from, to) => {
                let _ = write!(out, "{from}-{to}");
            }
        }
    }
    out.push(']');
}

/// Renders an `any_of` alternation.
///
/// Single characters, ranges and `any_of_chars` members are fused into one
/// bracket class placed after all other alternatives, e.g.
/// `(?:XXX|[a-f0-9])`. Both partitions keep their original order.
fn write_any_of(out: &mut String, children: &[AstNode]) {
    let mut fused = String::new();
    let mut rest = Vec::new();
    for child in children {
        match child {
            AstNode::Char(lit) | AstNode::AnyOfChars(lit) => fused.push_str(lit.escaped()),
            AstNode::Range(from, to) => {
                let _ = write!(fused, "{from}-{to}");
            }
            _ => rest.push(child),
        }
    }

    if rest.is_empty() {
        let _ = write!(out, "[{fused}]");
        return;
    }

    out.push_str("(?:");
    for (i, node) in rest.iter().enumerate() {
        if i > 0 {
            out.push('|');
        }
        write_node(out, node);
    }
    if !fused.is_empty() {
        let _ = write!(out, "|[{fused}]");
    }
    out.push(')');
}
