//! AND/OR composite blocks of filter nodes.

use crate::operation::Operation;

/// One node in a filter tree: a leaf predicate or a nested block.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterNode {
    /// A leaf predicate.
    Operation(Operation),
    /// A nested composite block.
    Block(FilterBlock),
}

impl From<Operation> for FilterNode {
    fn from(op: Operation) -> Self {
        Self::Operation(op)
    }
}

impl From<FilterBlock> for FilterNode {
    fn from(block: FilterBlock) -> Self {
        Self::Block(block)
    }
}

/// A composite grouping of filter nodes joined by one logical connective.
///
/// Blocks own their children outright, so a tree can never share or cycle
/// through nodes. Children keep insertion order, nesting depth is unbounded,
/// and an empty block is legal (it renders as the dialect's empty group).
///
/// # Examples
///
/// ```
/// use sift_filter::{FilterBlock, Operation};
///
/// let mut block = FilterBlock::and([Operation::equal("status", "open")]);
/// block.add(Operation::with_tag(["urgent"]));
/// block.add(FilterBlock::or([
///     Operation::equal("assignee", "alice"),
///     Operation::equal("assignee", "bob"),
/// ]));
/// assert_eq!(block.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FilterBlock {
    /// Children joined with the dialect's AND token.
    And(Vec<FilterNode>),
    /// Children joined with the dialect's OR token.
    Or(Vec<FilterNode>),
}

impl FilterBlock {
    /// Create an empty AND block.
    pub fn new_and() -> Self {
        Self::And(Vec::new())
    }

    /// Create an empty OR block.
    pub fn new_or() -> Self {
        Self::Or(Vec::new())
    }

    /// Create an AND block from an initial child sequence.
    pub fn and(children: impl IntoIterator<Item = impl Into<FilterNode>>) -> Self {
        Self::And(children.into_iter().map(Into::into).collect())
    }

    /// Create an OR block from an initial child sequence.
    pub fn or(children: impl IntoIterator<Item = impl Into<FilterNode>>) -> Self {
        Self::Or(children.into_iter().map(Into::into).collect())
    }

    /// Append a child node.
    pub fn add(&mut self, child: impl Into<FilterNode>) -> &mut Self {
        self.children_mut().push(child.into());
        self
    }

    /// Append a child node if one is present; `None` is a no-op.
    ///
    /// Lets call sites compose conditionally without an `if` around every
    /// optional predicate.
    pub fn add_opt(&mut self, child: Option<impl Into<FilterNode>>) -> &mut Self {
        if let Some(child) = child {
            self.children_mut().push(child.into());
        }
        self
    }

    /// Append every child in order.
    pub fn add_multiple(
        &mut self,
        children: impl IntoIterator<Item = impl Into<FilterNode>>,
    ) -> &mut Self {
        self.children_mut()
            .extend(children.into_iter().map(Into::into));
        self
    }

    /// Child nodes in insertion order.
    pub fn sub_blocks(&self) -> &[FilterNode] {
        match self {
            Self::And(children) | Self::Or(children) => children,
        }
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.sub_blocks().len()
    }

    /// Check if the block has no children.
    pub fn is_empty(&self) -> bool {
        self.sub_blocks().is_empty()
    }

    fn children_mut(&mut self) -> &mut Vec<FilterNode> {
        match self {
            Self::And(children) | Self::Or(children) => children,
        }
    }
}
