use serde::{Deserialize, Serialize};

use super::GhUser;

/// GitHub Repository.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRepository {
    /// Name.
    pub name: String,
    /// Full name.
    pub full_name: String,
    /// Owner.
    pub owner: GhUser,
    /// Description.
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_null_description() {
        let repository: GhRepository = serde_json::from_str(
            r#"{
                "id": 1296269,
                "name": "proj",
                "full_name": "alice/proj",
                "owner": { "login": "alice", "id": 1 },
                "description": null,
                "private": false
            }"#,
        )
        .unwrap();

        assert_eq!(
            repository,
            GhRepository {
                name: "proj".into(),
                full_name: "alice/proj".into(),
                owner: GhUser {
                    login: "alice".into()
                },
                description: None,
            }
        );
    }
}
