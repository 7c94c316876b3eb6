use async_graphql::{ID, Interface};

use crate::{
    connection_error::GlobalIdError, faction::Faction, global_id::from_global_id, ship::Ship,
    star_wars_data::StarWarsData,
};

/// An object with a global ID.
#[derive(Interface)]
#[graphql(field(name = "id", ty = "ID", desc = "The global ID of the object."))]
pub enum Node {
    Faction(Faction),
    Ship(Ship),
}

/// Resolves a global ID to the faction or ship it identifies.
///
/// Well-formed IDs of unknown objects resolve to `None`.
///
/// * `data` - Dataset to look the object up in.
/// * `global_id` - Global ID of the object.
pub fn resolve_node(data: &StarWarsData, global_id: &str) -> Result<Option<Node>, GlobalIdError> {
    let (type_name, id) = from_global_id(global_id)?;
    let node = match type_name.as_str() {
        "Faction" => data.faction(&id).cloned().map(Node::Faction),
        "Ship" => data.ship(&id).cloned().map(Node::Ship),
        _ => None,
    };
    Ok(node)
}
