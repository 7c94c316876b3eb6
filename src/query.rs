use async_graphql::{Context, EmptyMutation, EmptySubscription, Error, ID, Object, Result, Schema};
use log::info;

use crate::{
    faction::Faction,
    node::{Node, resolve_node},
    star_wars_data::StarWarsData,
};

/// GraphQL schema of the Star Wars ships graph.
pub type StarWarsSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Describes GraphQL Star Wars queries.
pub struct Query;

#[Object]
impl Query {
    /// Retrieves the Alliance to Restore the Republic.
    async fn rebels<'a>(&self, ctx: &Context<'a>) -> Result<Faction> {
        let data = ctx.data::<StarWarsData>()?;
        match data.rebels() {
            Some(faction) => Ok(faction.clone()),
            None => Err(Error::new("Rebel faction not found.")),
        }
    }

    /// Retrieves the Galactic Empire.
    async fn empire<'a>(&self, ctx: &Context<'a>) -> Result<Faction> {
        let data = ctx.data::<StarWarsData>()?;
        match data.empire() {
            Some(faction) => Ok(faction.clone()),
            None => Err(Error::new("Empire faction not found.")),
        }
    }

    /// Retrieves the object of specific global ID.
    async fn node<'a>(
        &self,
        ctx: &Context<'a>,
        #[graphql(desc = "Global ID of the object to retrieve.")] id: ID,
    ) -> Result<Option<Node>> {
        let data = ctx.data::<StarWarsData>()?;
        Ok(resolve_node(data, &id)?)
    }
}

/// Builds the Star Wars schema on top of a dataset.
///
/// * `data` - Dataset shared by every request executed against the schema.
pub fn build_schema(data: StarWarsData) -> StarWarsSchema {
    info!("Building Star Wars schema.");
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .extension(async_graphql::extensions::Logger)
        .data(data)
        .finish()
}
