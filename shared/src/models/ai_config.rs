use serde::{Deserialize, Serialize};

/// AI assistant settings the visitor saves from the settings modal. Stored as a JSON
/// object in browser local storage; field names match the stored record, so configs
/// written by earlier versions of the page keep loading.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConfig {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub base_url: String,
}
