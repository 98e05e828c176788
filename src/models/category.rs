use async_graphql::Enum;
use serde::{Deserialize, Serialize};

#[derive(Enum, Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductCategory {
    Style,
    Food,
    Tech,
    Sport,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 4] = [Self::Style, Self::Food, Self::Tech, Self::Sport];

    /// Value as stored in the `category` field of a product document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Style => "STYLE",
            Self::Food => "FOOD",
            Self::Tech => "TECH",
            Self::Sport => "SPORT",
        }
    }
}
