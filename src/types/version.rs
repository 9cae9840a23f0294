use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ServerVersion {
    pub version: String,
    #[serde(default)]
    pub local: bool,
}
