use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    pub category: String,
    pub author: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
