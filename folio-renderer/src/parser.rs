//! Stack-based block parser.
//!
//! Every open tag pushes a frame. A close tag pops the innermost open frame
//! it matches: `{{/name}}` matches a loop opened with the identical name,
//! `{{/if}}` matches the innermost conditional. Frames left open above the
//! matched one, frames still open at end of input, stray closes and stray
//! `{{else}}` tags all become literal text.

use crate::lexer::{tokenize, Token};

/// A node of the parsed template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<'a> {
    Text(&'a str),
    Variable {
        raw: &'a str,
        path: &'a str,
    },
    Loop {
        open: &'a str,
        name: &'a str,
        body: Vec<Node<'a>>,
        close: &'a str,
    },
    Conditional {
        open: &'a str,
        path: &'a str,
        then_branch: Vec<Node<'a>>,
        else_branch: Option<ElseBranch<'a>>,
        close: &'a str,
    },
}

/// The `{{else}} ...` half of a conditional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElseBranch<'a> {
    pub tag: &'a str,
    pub body: Vec<Node<'a>>,
}

impl<'a> Node<'a> {
    /// Append this node's original source text to `out`.
    pub fn write_source(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Variable { raw, .. } => out.push_str(raw),
            Node::Loop { open, body, close, .. } => {
                out.push_str(open);
                write_source_all(body, out);
                out.push_str(close);
            }
            Node::Conditional {
                open,
                then_branch,
                else_branch,
                close,
                ..
            } => {
                out.push_str(open);
                write_source_all(then_branch, out);
                if let Some(branch) = else_branch {
                    out.push_str(branch.tag);
                    write_source_all(&branch.body, out);
                }
                out.push_str(close);
            }
        }
    }
}

pub(crate) fn write_source_all(nodes: &[Node<'_>], out: &mut String) {
    for node in nodes {
        node.write_source(out);
    }
}

// ---------------------------------------------------------------------------
// Frames
// ---------------------------------------------------------------------------

enum FrameKind<'a> {
    Root,
    Loop {
        open: &'a str,
        name: &'a str,
    },
    Conditional {
        open: &'a str,
        path: &'a str,
        /// Set once `{{else}}` is seen; `then_branch` holds the nodes before it.
        else_tag: Option<&'a str>,
        then_branch: Vec<Node<'a>>,
    },
}

struct Frame<'a> {
    kind: FrameKind<'a>,
    nodes: Vec<Node<'a>>,
}

impl<'a> Frame<'a> {
    fn new(kind: FrameKind<'a>) -> Self {
        Frame { kind, nodes: Vec::new() }
    }

    fn is_loop_named(&self, wanted: &str) -> bool {
        matches!(self.kind, FrameKind::Loop { name, .. } if name == wanted)
    }

    fn is_conditional(&self) -> bool {
        matches!(self.kind, FrameKind::Conditional { .. })
    }

    /// Close this frame with `close`, producing a block node.
    fn close(self, close: &'a str) -> Node<'a> {
        match self.kind {
            FrameKind::Loop { open, name } => Node::Loop {
                open,
                name,
                body: self.nodes,
                close,
            },
            FrameKind::Conditional {
                open,
                path,
                else_tag,
                then_branch,
            } => match else_tag {
                Some(tag) => Node::Conditional {
                    open,
                    path,
                    then_branch,
                    else_branch: Some(ElseBranch { tag, body: self.nodes }),
                    close,
                },
                None => Node::Conditional {
                    open,
                    path,
                    then_branch: self.nodes,
                    else_branch: None,
                    close,
                },
            },
            FrameKind::Root => unreachable!("root frame is never closed"),
        }
    }

    /// Unclosed frame: its open tag becomes text, its children are kept.
    fn into_literal(self) -> Vec<Node<'a>> {
        let mut out = Vec::new();
        match self.kind {
            FrameKind::Root => {}
            FrameKind::Loop { open, .. } => out.push(Node::Text(open)),
            FrameKind::Conditional {
                open,
                else_tag,
                then_branch,
                ..
            } => {
                out.push(Node::Text(open));
                if let Some(tag) = else_tag {
                    out.extend(then_branch);
                    out.push(Node::Text(tag));
                }
            }
        }
        out.extend(self.nodes);
        out
    }
}

// ---------------------------------------------------------------------------
// parse
// ---------------------------------------------------------------------------

/// Parse `source` into a node tree. Never fails.
pub fn parse(source: &str) -> Vec<Node<'_>> {
    let mut stack = vec![Frame::new(FrameKind::Root)];

    for token in tokenize(source) {
        match token {
            Token::Text(text) => push(&mut stack, Node::Text(text)),
            Token::Variable { raw, path } => push(&mut stack, Node::Variable { raw, path }),
            Token::LoopOpen { raw, name } => {
                stack.push(Frame::new(FrameKind::Loop { open: raw, name }));
            }
            Token::IfOpen { raw, path } => {
                stack.push(Frame::new(FrameKind::Conditional {
                    open: raw,
                    path,
                    else_tag: None,
                    then_branch: Vec::new(),
                }));
            }
            Token::Else { raw } => {
                let Some(top) = stack.last_mut() else { continue };
                match &mut top.kind {
                    FrameKind::Conditional {
                        else_tag,
                        then_branch,
                        ..
                    } if else_tag.is_none() => {
                        *else_tag = Some(raw);
                        *then_branch = std::mem::take(&mut top.nodes);
                    }
                    _ => top.nodes.push(Node::Text(raw)),
                }
            }
            Token::LoopClose { raw, name } => {
                close_innermost(&mut stack, raw, |frame| frame.is_loop_named(name));
            }
            Token::IfClose { raw } => {
                close_innermost(&mut stack, raw, Frame::is_conditional);
            }
        }
    }

    while stack.len() > 1 {
        unwind_one(&mut stack);
    }
    stack.pop().map(|root| root.nodes).unwrap_or_default()
}

fn push<'a>(stack: &mut [Frame<'a>], node: Node<'a>) {
    if let Some(top) = stack.last_mut() {
        top.nodes.push(node);
    }
}

/// Close the innermost frame satisfying `is_match`, or emit `raw` as text.
fn close_innermost<'a>(
    stack: &mut Vec<Frame<'a>>,
    raw: &'a str,
    is_match: impl Fn(&Frame<'a>) -> bool,
) {
    // Index 0 is the root frame and never matches.
    let Some(index) = stack.iter().skip(1).rposition(is_match).map(|i| i + 1) else {
        push(stack, Node::Text(raw));
        return;
    };
    while stack.len() > index + 1 {
        unwind_one(stack);
    }
    if let Some(frame) = stack.pop() {
        let node = frame.close(raw);
        push(stack, node);
    }
}

/// Pop the top frame as literal text into its parent.
fn unwind_one(stack: &mut Vec<Frame<'_>>) {
    if let Some(frame) = stack.pop() {
        let nodes = frame.into_literal();
        if let Some(parent) = stack.last_mut() {
            parent.nodes.extend(nodes);
        }
    }
}
