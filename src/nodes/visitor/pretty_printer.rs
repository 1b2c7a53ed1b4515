use crate::{
    visitor::{walk, NodeContext, Visitor},
    Node,
};
use alloc::string::String;
use core::fmt::Write as _;
#[cfg(feature = "std")]
use std::io::{self, Write};

/// A visitor of the tree which renders every node on its own line.
///
/// Nodes are listed in pre-order and numbered in that order. Each line holds
/// the node number, the node character, a `*` marker if the node ends a word,
/// and for everything but the root, the link and number of its parent:
///
/// ```text
/// 0 'c'
/// 1 'a' <- equal 0
/// 2 't' * <- equal 1
/// ```
///
/// Referencing the parent by number instead of indenting by depth keeps the
/// output linear in the number of nodes, even for very deep trees.
#[derive(Debug, Default)]
pub struct TextPrinter {
    output: String,
}

impl TextPrinter {
    /// Render the tree with the given root into a string.
    pub fn render(root: Option<&Node>) -> String {
        walk(root, TextPrinter::default())
    }
}

impl Visitor for TextPrinter {
    type Output = String;

    fn visit_node(&mut self, node: &Node, context: NodeContext) {
        let marker = if node.is_end_of_word() { " *" } else { "" };

        // writing into a `String` cannot fail
        let _ = write!(
            self.output,
            "{} {:?}{marker}",
            context.id,
            node.character()
        );
        let _ = match context.parent {
            Some((parent_id, link)) => writeln!(self.output, " <- {link} {parent_id}"),
            None => writeln!(self.output),
        };
    }

    fn finish(self) -> Self::Output {
        self.output
    }
}

/// A visitor of the tree that will print the tree in "dot" notation.
///
/// Nodes that end a word are drawn as double circles, and every edge is
/// labelled with the link it follows. Node labels hold the character itself,
/// with only `"` and `\` escaped.
///
/// See ['DOT Language | Graphviz'](https://graphviz.org/doc/info/lang.html) for
/// information about syntax and example of the language.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct DotPrinter<O: Write> {
    output: O,
    result: io::Result<()>,
}

#[cfg(feature = "std")]
impl<O: Write> DotPrinter<O> {
    /// Write the dot-format of the given tree to the given output.
    pub fn print_tree(mut output: O, root: Option<&Node>) -> io::Result<()> {
        writeln!(output, "strict digraph G {{")?;

        let mut output = walk(
            root,
            DotPrinter {
                output,
                result: Ok(()),
            },
        )?;

        writeln!(output, "}}")?;
        output.flush()
    }

    fn write_node(&mut self, node: &Node, context: NodeContext) -> io::Result<()> {
        let shape = if node.is_end_of_word() {
            "doublecircle"
        } else {
            "circle"
        };

        let mut label_buffer = [0; 4];
        let label: &str = match node.character() {
            '"' => "\\\"",
            '\\' => "\\\\",
            character => &*character.encode_utf8(&mut label_buffer),
        };

        writeln!(
            self.output,
            "n{} [label=\"{label}\", shape={shape}]",
            context.id,
        )?;

        if let Some((parent_id, link)) = context.parent {
            writeln!(
                self.output,
                "n{parent_id} -> n{} [label=\"{link}\"]",
                context.id
            )?;
        }

        Ok(())
    }
}

#[cfg(feature = "std")]
impl<O: Write> Visitor for DotPrinter<O> {
    type Output = io::Result<O>;

    fn visit_node(&mut self, node: &Node, context: NodeContext) {
        if self.result.is_ok() {
            self.result = self.write_node(node, context);
        }
    }

    fn finish(self) -> Self::Output {
        self.result.map(|()| self.output)
    }
}
