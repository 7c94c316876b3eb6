use base64::{Engine, engine::general_purpose::STANDARD};

use crate::connection_error::GlobalIdError;

/// Builds the opaque global ID of an object from its GraphQL type name and local ID.
pub fn to_global_id(type_name: &str, id: &str) -> String {
    STANDARD.encode(format!("{}:{}", type_name, id))
}

/// Splits a global ID into its GraphQL type name and local ID.
pub fn from_global_id(global_id: &str) -> Result<(String, String), GlobalIdError> {
    let invalid = || GlobalIdError(global_id.to_string());
    let bytes = STANDARD.decode(global_id).map_err(|_| invalid())?;
    let text = String::from_utf8(bytes).map_err(|_| invalid())?;
    match text.split_once(':') {
        Some((type_name, id)) if !type_name.is_empty() && !id.is_empty() => {
            Ok((type_name.to_string(), id.to_string()))
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn global_ids_are_reversible() {
        let id = to_global_id("Ship", "1");
        assert_eq!(id, "U2hpcDox");
        assert_eq!(
            from_global_id(&id),
            Ok(("Ship".to_string(), "1".to_string()))
        );
    }

    #[test]
    fn local_ids_may_contain_colons() {
        let id = to_global_id("Faction", "a:b");
        assert_eq!(
            from_global_id(&id),
            Ok(("Faction".to_string(), "a:b".to_string()))
        );
    }

    #[test]
    fn rejects_malformed_global_ids() {
        for id in ["", "%%%", "U2hpcA==", "OjE=", "U2hpcDo="] {
            assert_eq!(from_global_id(id), Err(GlobalIdError(id.to_string())));
        }
    }
}
