use async_graphql::SimpleObject;

use crate::{
    base_connection::{BaseConnection, Edge, PageInfo},
    ship::Ship,
};

/// A connection of Ships.
#[derive(Debug, SimpleObject, Clone)]
pub struct ShipConnection {
    /// The edges of the current page.
    pub edges: Vec<ShipEdge>,
    /// Information to aid in pagination.
    pub page_info: PageInfo,
    /// The total amount of items in this connection.
    pub total_count: u64,
}

/// An edge in a connection of Ships.
#[derive(Debug, SimpleObject, Clone)]
pub struct ShipEdge {
    /// A cursor for use in pagination.
    pub cursor: String,
    /// The ship at the end of the edge.
    pub node: Ship,
}

impl From<Edge<&Ship>> for ShipEdge {
    fn from(value: Edge<&Ship>) -> Self {
        Self {
            cursor: value.cursor,
            node: value.node.clone(),
        }
    }
}

/// Implementation of conversion from BaseConnection<&Ship> to ShipConnection.
///
/// Prevents GraphQL naming conflicts.
impl From<BaseConnection<&Ship>> for ShipConnection {
    fn from(value: BaseConnection<&Ship>) -> Self {
        Self {
            edges: value.edges.into_iter().map(ShipEdge::from).collect(),
            page_info: value.page_info,
            total_count: value.total_count,
        }
    }
}
