//! The converter contract and the shared tree walk.
//!
//! Every dialect crate implements [`Converter`] independently; there is no
//! base renderer to inherit from. What the dialects do share is mechanical:
//! walking the block tree, joining sort parts, and stitching the two
//! fragments together. Those pieces live here as free functions,
//! parameterized by the tokens and callbacks that differ per dialect.

use crate::block::{FilterBlock, FilterNode};
use crate::operation::Operation;
use crate::query::FilterQuery;
use crate::sorting::{SortOrder, Sorting};

/// Renders a [`FilterQuery`] into one dialect's query text.
///
/// Implementations are pure. Converting never mutates the converter or the
/// tree, so the same query renders to the same string on every call, from
/// any thread.
///
/// Operations a dialect cannot express render as the empty string rather
/// than failing; one tree can be handed to every converter.
pub trait Converter {
    /// Render the whole query (filter block plus sorting) as one string.
    fn convert_filter_query(&self, query: &FilterQuery) -> String;
}

/// Recursively render a block: children joined with the connective token,
/// the whole wrapped in parentheses.
///
/// Leaf operations go through `render_op`; nested blocks recurse. Children
/// that render empty are kept in the join, so an unsupported operation
/// leaves a visible gap instead of silently reshaping the expression the
/// caller built.
pub fn render_block<F>(
    block: &FilterBlock,
    and_token: &str,
    or_token: &str,
    render_op: &F,
) -> String
where
    F: Fn(&Operation) -> String,
{
    let (children, token) = match block {
        FilterBlock::And(children) => (children, and_token),
        FilterBlock::Or(children) => (children, or_token),
    };
    let parts: Vec<String> = children
        .iter()
        .map(|child| match child {
            FilterNode::Operation(op) => render_op(op),
            FilterNode::Block(inner) => render_block(inner, and_token, or_token, render_op),
        })
        .collect();
    format!("({})", parts.join(token))
}

/// Render sort parts as `prefix` followed by comma-joined `field direction`
/// pairs, with the direction keyword chosen by the dialect.
pub fn render_sorting<F>(sorting: &Sorting, prefix: &str, direction: &F) -> String
where
    F: Fn(SortOrder) -> &'static str,
{
    let parts: Vec<String> = sorting
        .parts()
        .iter()
        .map(|(field, order)| format!("{} {}", field, direction(*order)))
        .collect();
    format!("{}{}", prefix, parts.join(","))
}

/// Stitch the rendered fragments into the final query text.
///
/// The filter text comes first, then, only when both fragments are present
/// and the dialect configures a separator word, the separator, then the
/// sorting text. The result is trimmed so single-fragment queries carry no
/// stray spaces.
///
/// Presence is decided by the query, not by the rendered text: a filter
/// block that rendered to `()` still counts as present.
pub fn compose(
    block_text: Option<&str>,
    sorting_text: Option<&str>,
    separator: Option<&str>,
) -> String {
    let mut out = String::new();
    if let Some(block) = block_text {
        out.push_str(block);
        out.push(' ');
    }
    if let Some(sep) = separator {
        if !out.is_empty() && !sep.is_empty() && sorting_text.is_some() {
            out.push_str(sep);
            out.push(' ');
        }
    }
    if let Some(sorting) = sorting_text {
        out.push_str(sorting);
    }
    out.trim().to_string()
}
