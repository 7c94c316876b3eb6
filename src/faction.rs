use async_graphql::{ComplexObject, Context, ID, Result, SimpleObject};
use serde::Deserialize;

use crate::{
    base_connection::{ConnectionArgs, connection_from_slice},
    global_id::to_global_id,
    ship_connection::ShipConnection,
    star_wars_data::StarWarsData,
};

/// A faction in the Star Wars saga.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, SimpleObject)]
#[graphql(complex)]
pub struct Faction {
    /// Local faction id within the dataset.
    #[serde(rename = "id")]
    #[graphql(skip)]
    pub _id: String,
    /// The name of the faction.
    pub name: String,
    /// The internal vector consisting of the ids of the faction's ships, in fleet order.
    #[serde(rename = "ships")]
    #[graphql(skip)]
    pub internal_ship_ids: Vec<String>,
}

#[ComplexObject]
impl Faction {
    /// The global ID of the faction.
    pub async fn id(&self) -> ID {
        ID(to_global_id("Faction", &self._id))
    }

    /// Retrieves the ships used by the faction.
    async fn ships<'a>(
        &self,
        ctx: &Context<'a>,
        #[graphql(desc = "Describes that the `first` N ships should be retrieved.")]
        first: Option<i32>,
        #[graphql(desc = "Only ships after the ship with this cursor are retrieved.")]
        after: Option<String>,
        #[graphql(desc = "Describes that the `last` N ships should be retrieved.")]
        last: Option<i32>,
        #[graphql(desc = "Only ships before the ship with this cursor are retrieved.")]
        before: Option<String>,
    ) -> Result<ShipConnection> {
        let data = ctx.data::<StarWarsData>()?;
        let ships = data.ships_of(self);
        let args = ConnectionArgs {
            first,
            after,
            last,
            before,
        };
        let connection = connection_from_slice(&ships, &args)?;
        Ok(ShipConnection::from(connection))
    }
}
