use async_graphql::{ComplexObject, ID, SimpleObject};
use serde::Deserialize;

use crate::global_id::to_global_id;

/// A ship in the Star Wars saga.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Ship {
    /// Local ship id within the dataset.
    #[serde(rename = "id")]
    #[graphql(skip)]
    pub _id: String,
    /// The name of the ship.
    pub name: String,
}

#[ComplexObject]
impl Ship {
    /// The global ID of the ship.
    pub async fn id(&self) -> ID {
        ID(to_global_id("Ship", &self._id))
    }
}
