use crate::{
    visitor::{walk, NodeContext, Visitor},
    Link, Node,
};
use core::{fmt, mem};

/// A visitor of the tree which collects statistics about the tree, like how
/// many nodes there are, how deep the tree is, and how the nodes are linked.
#[derive(Debug)]
pub struct TreeStatsCollector {
    stats: TreeStats,
}

impl TreeStatsCollector {
    /// Run the tree stats collection on the given root node, then return the
    /// accumulated stats.
    pub fn collect(root: Option<&Node>) -> TreeStats {
        walk(
            root,
            TreeStatsCollector {
                stats: TreeStats::default(),
            },
        )
    }
}

impl Visitor for TreeStatsCollector {
    type Output = TreeStats;

    fn visit_node(&mut self, node: &Node, context: NodeContext) {
        let stats = &mut self.stats;

        stats.node_count += 1;
        stats.max_depth = stats.max_depth.max(context.depth);
        stats.total_depth += context.depth;

        if node.is_end_of_word() {
            stats.word_count += 1;
            stats.longest_word = stats.longest_word.max(context.position + 1);
        }

        match context.parent.map(|(_, link)| link) {
            Some(Link::Lower) => stats.lower_links += 1,
            Some(Link::Equal) => stats.equal_links += 1,
            Some(Link::Higher) => stats.higher_links += 1,
            None => {},
        }
    }

    fn finish(self) -> Self::Output {
        self.stats
    }
}

/// Collection of stats about the shape of a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,
    /// Number of nodes that end a word.
    pub word_count: usize,
    /// Number of nodes reached through a `lower` link.
    pub lower_links: usize,
    /// Number of nodes reached through an `equal` link.
    pub equal_links: usize,
    /// Number of nodes reached through a `higher` link.
    pub higher_links: usize,
    /// Largest number of links between the root and any node.
    pub max_depth: usize,
    /// Sum of the depth of every node.
    pub total_depth: usize,
    /// Number of characters in the longest stored word.
    pub longest_word: usize,
}

impl TreeStats {
    /// The average number of links between the root and a node, or 0 for an
    /// empty tree.
    pub fn mean_depth(&self) -> f64 {
        if self.node_count == 0 {
            0.0
        } else {
            (self.total_depth as f64) / (self.node_count as f64)
        }
    }

    /// The approximate number of bytes taken up by the nodes of the tree,
    /// excluding allocator overhead.
    pub fn total_node_bytes(&self) -> usize {
        self.node_count * mem::size_of::<Node>()
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeStats")
            .field("node_count", &self.node_count)
            .field("word_count", &self.word_count)
            .field("lower_links", &self.lower_links)
            .field("equal_links", &self.equal_links)
            .field("higher_links", &self.higher_links)
            .field("max_depth", &self.max_depth)
            .field("mean_depth", &self.mean_depth())
            .field("longest_word", &self.longest_word)
            .field("total_node_bytes", &self.total_node_bytes())
            .finish()
    }
}
