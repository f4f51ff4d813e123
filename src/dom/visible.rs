//! Presentation text for hosts that cannot lay out markup.

use super::{Document, NodeId, NodeKind};

const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "dd", "div", "dl", "dt", "footer",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "li", "main", "nav", "ol", "p", "pre",
    "section", "table", "tr", "ul",
];

const HIDDEN_TAGS: &[&str] = &["head", "script", "style", "template"];

/// Pending work for the visible-text walk.
enum Visit {
    Node { id: NodeId, preformatted: bool },
    /// Closes a block element after its children have been written.
    EndBlock,
}

#[derive(Default)]
struct Lines {
    lines: Vec<String>,
    current: String,
    pending_space: bool,
}

impl Lines {
    fn push_collapsed(&mut self, text: &str) {
        for ch in text.chars() {
            if ch.is_whitespace() {
                self.pending_space = !self.current.is_empty();
            } else {
                if self.pending_space {
                    self.current.push(' ');
                    self.pending_space = false;
                }
                self.current.push(ch);
            }
        }
    }

    fn push_preformatted(&mut self, text: &str) {
        self.pending_space = false;
        for ch in text.chars() {
            match ch {
                '\n' => self.hard_break(),
                '\r' => {}
                '\t' => self.current.push_str("    "),
                _ => self.current.push(ch),
            }
        }
    }

    /// End the current line if it has content.
    fn soft_break(&mut self) {
        if !self.current.is_empty() {
            self.hard_break();
        }
        self.pending_space = false;
    }

    /// End the current line, even if empty.
    fn hard_break(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
    }

    fn finish(mut self) -> Vec<String> {
        self.soft_break();
        self.lines
    }
}

impl Document {
    /// Visible text of the body (or root) as display lines.
    ///
    /// Whitespace runs collapse to one space except inside `pre`; block
    /// elements start new lines and `br` forces one. `head`, `script`,
    /// `style` and `template` subtrees are not shown.
    #[must_use]
    pub fn visible_lines(&self) -> Vec<String> {
        let mut lines = Lines::default();
        let mut stack = vec![Visit::Node {
            id: self.body_or_root(),
            preformatted: false,
        }];
        while let Some(visit) = stack.pop() {
            let (id, preformatted) = match visit {
                Visit::Node { id, preformatted } => (id, preformatted),
                Visit::EndBlock => {
                    lines.soft_break();
                    continue;
                }
            };
            match self.node(id) {
                NodeKind::Text(text) if preformatted => lines.push_preformatted(text),
                NodeKind::Text(text) => lines.push_collapsed(text),
                NodeKind::Element { tag, children } => {
                    let tag = tag.as_str();
                    if HIDDEN_TAGS.contains(&tag) {
                        continue;
                    }
                    if tag == "br" {
                        lines.hard_break();
                        continue;
                    }
                    if BLOCK_TAGS.contains(&tag) {
                        lines.soft_break();
                        stack.push(Visit::EndBlock);
                    }
                    let preformatted = preformatted || tag == "pre";
                    stack.extend(
                        children
                            .iter()
                            .rev()
                            .map(|&id| Visit::Node { id, preformatted }),
                    );
                }
            }
        }
        lines.finish()
    }
}
