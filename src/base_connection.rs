use async_graphql::SimpleObject;
use log::debug;

use crate::{
    connection_error::ConnectionError,
    cursor::{decode, encode},
};

/// Pagination arguments of a connection field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConnectionArgs {
    /// Keep at most this many items from the start of the window.
    pub first: Option<i32>,
    /// Only items strictly after this cursor.
    pub after: Option<String>,
    /// Keep at most this many items from the end of the window.
    pub last: Option<i32>,
    /// Only items strictly before this cursor.
    pub before: Option<String>,
}

impl ConnectionArgs {
    /// Arguments of a forward pagination request.
    pub fn forward(first: Option<i32>, after: Option<String>) -> Self {
        Self {
            first,
            after,
            ..Default::default()
        }
    }

    /// Arguments of a backward pagination request.
    pub fn backward(last: Option<i32>, before: Option<String>) -> Self {
        Self {
            last,
            before,
            ..Default::default()
        }
    }
}

/// Information about pagination in a connection.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct PageInfo {
    /// Whether items exist after the last edge of this page.
    pub has_next_page: bool,
    /// Whether items exist before the first edge of this page.
    pub has_previous_page: bool,
    /// Cursor of the first edge, `None` if the page is empty.
    pub start_cursor: Option<String>,
    /// Cursor of the last edge, `None` if the page is empty.
    pub end_cursor: Option<String>,
}

/// A cursor paired with the node it addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<Node> {
    pub cursor: String,
    pub node: Node,
}

/// A page of an ordered list.
///
/// Converted into the concrete GraphQL connection types, which prevents GraphQL naming conflicts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseConnection<Node> {
    /// The edges of the current page in list order.
    pub edges: Vec<Edge<Node>>,
    /// Pagination information of the current page.
    pub page_info: PageInfo,
    /// The total amount of items in the underlying list.
    pub total_count: u64,
}

/// Resolves a connection over an ordered list.
///
/// The window starts after `after` and ends before `before`. `first` then caps the window from the
/// front and `last` from the back. Cursors address absolute positions in `items`, so pages fetched
/// with the same arguments over the same list are always identical.
///
/// * `items` - Ordered snapshot of all items of the connection.
/// * `args` - Pagination arguments.
pub fn connection_from_slice<Node: Clone>(
    items: &[Node],
    args: &ConnectionArgs,
) -> Result<BaseConnection<Node>, ConnectionError> {
    let first = page_size("first", args.first)?;
    let last = page_size("last", args.last)?;
    let after = args.after.as_deref().map(decode).transpose()?;
    let before = args.before.as_deref().map(decode).transpose()?;

    let total_count = items.len();
    let mut start_offset = after.map_or(0, |offset| offset.saturating_add(1));
    let mut end_offset = before.map_or(total_count, |offset| offset.min(total_count));
    if let Some(first) = first {
        end_offset = end_offset.min(start_offset.saturating_add(first));
    }
    if let Some(last) = last {
        start_offset = start_offset.max(end_offset.saturating_sub(last));
    }
    debug!(
        "Resolving connection window {}..{} of {} items.",
        start_offset, end_offset, total_count
    );

    let edges: Vec<Edge<Node>> = match items.get(start_offset..end_offset) {
        Some(page) => page
            .iter()
            .enumerate()
            .map(|(index, node)| Edge {
                cursor: encode(start_offset + index),
                node: node.clone(),
            })
            .collect(),
        None => Vec::new(),
    };
    let page_info = PageInfo {
        has_next_page: end_offset < total_count,
        has_previous_page: start_offset.min(total_count) > 0,
        start_cursor: edges.first().map(|edge| edge.cursor.clone()),
        end_cursor: edges.last().map(|edge| edge.cursor.clone()),
    };
    Ok(BaseConnection {
        edges,
        page_info,
        total_count: total_count as u64,
    })
}

/// Validates a page size argument.
fn page_size(argument: &'static str, value: Option<i32>) -> Result<Option<usize>, ConnectionError> {
    value
        .map(|value| {
            usize::try_from(value).map_err(|_| ConnectionError::InvalidArgument { argument, value })
        })
        .transpose()
}
