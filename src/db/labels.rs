use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};


/// Node categories emitted by the dataset loader. Every label has a unique `name`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum NodeLabel {
    Disease,
    Symptom,
    Department,
    Drug,
    Complication,
    CheckItem,
}

impl NodeLabel {

    pub fn names_query(&self) -> String {
        format!("MATCH (n:{}) RETURN n.name AS name", self)
    }
}
