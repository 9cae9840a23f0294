use serde::{Deserialize, Deserializer, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub project_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default)]
    pub auto_open: bool,
    #[serde(default)]
    pub auto_start: bool,
    #[serde(default)]
    pub auto_close: bool,
}

/// Body of a rename (`PUT`) or duplicate (`POST .../duplicate`) request.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProjectUpdate {
    pub name: String,
}

impl ProjectUpdate {
    pub fn rename(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Order projects by name, then id so equal names keep a stable order.
pub fn sort_by_name(projects: &mut [Project]) {
    projects.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.project_id.cmp(&b.project_id))
    });
}
