use crate::ast::{AssertionKind, AstNode, Quantifier};
use std::fmt;

/// The container a [`Frame`] is collecting children for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameKind {
    Root,
    Group,
    Capture,
    NamedCapture(String),
    AnyOf,
    Assertion(AssertionKind),
}

impl FrameKind {
    /// Folds the collected `children` into the container node this frame
    /// stands for.
    fn into_node(self, children: Vec<AstNode>) -> AstNode {
        match self {
            FrameKind::Root | FrameKind::Group => AstNode::Group {
                capturing: false,
                children,
            },
            FrameKind::Capture => AstNode::Group {
                capturing: true,
                children,
            },
            FrameKind::NamedCapture(name) => AstNode::NamedGroup { name, children },
            FrameKind::AnyOf => AstNode::AnyOf(children),
            FrameKind::Assertion(kind) => AstNode::Assertion { kind, children },
        }
    }
}

/// Formats the frame kind as the builder call that opened it.
impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameKind::Root => f.write_str("root"),
            FrameKind::Group => f.write_str("group()"),
            FrameKind::Capture => f.write_str("capture()"),
            FrameKind::NamedCapture(name) => write!(f, "named_capture({name:?})"),
            FrameKind::AnyOf => f.write_str("any_of()"),
            FrameKind::Assertion(kind) => write!(f, "{}()", kind.method()),
        }
    }
}

/// A construction context: the children collected so far for one container,
/// plus the quantifier waiting for the next child.
#[derive(Debug, Clone)]
pub struct Frame {
    kind: FrameKind,
    quantifier: Option<Quantifier>,
    elements: Vec<AstNode>,
}

impl Frame {
    fn new(kind: FrameKind) -> Self {
        Self {
            kind,
            quantifier: None,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> &FrameKind {
        &self.kind
    }

    #[must_use]
    pub fn pending_quantifier(&self) -> Option<Quantifier> {
        self.quantifier
    }

    #[must_use]
    pub fn elements(&self) -> &[AstNode] {
        &self.elements
    }

    pub(crate) fn set_quantifier(&mut self, quantifier: Quantifier) {
        self.quantifier = Some(quantifier);
    }

    /// Appends `node`, wrapping it in the pending quantifier if there is one.
    /// An anchor leaves the quantifier pending for the next node. An assertion
    /// consumes it without taking it.
    pub(crate) fn push(&mut self, node: AstNode) {
        let node = match node {
            AstNode::Anchor(_) => node,
            AstNode::Assertion { .. } => {
                self.quantifier = None;
                node
            }
            _ => match self.quantifier.take() {
                Some(quantifier) => AstNode::Quantified {
                    inner: Box::new(node),
                    quantifier,
                },
                None => node,
            },
        };
        self.elements.push(node);
    }
}

/// The stack of open frames. The root frame is held apart from the open ones
/// so that it can never be popped.
#[derive(Debug, Clone)]
pub struct FrameStack {
    root: Frame,
    open: Vec<Frame>,
}

impl Default for FrameStack {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStack {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Frame::new(FrameKind::Root),
            open: Vec::new(),
        }
    }

    /// The number of frames, root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open.len() + 1
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.open.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> &Frame {
        self.open.last().unwrap_or(&self.root)
    }

    pub(crate) fn current_mut(&mut self) -> &mut Frame {
        self.open.last_mut().unwrap_or(&mut self.root)
    }

    /// The elements of the root frame.
    #[must_use]
    pub fn root(&self) -> &[AstNode] {
        &self.root.elements
    }

    pub(crate) fn open(&mut self, kind: FrameKind) {
        self.open.push(Frame::new(kind));
    }

    /// Pops the current frame and appends its container node to the frame
    /// below. Returns `false` if only the root frame is left.
    pub(crate) fn close(&mut self) -> bool {
        let Some(frame) = self.open.pop() else {
            return false;
        };
        let node = frame.kind.into_node(frame.elements);
        self.current_mut().push(node);
        true
    }
}
