//! Cafe entity types

use serde::{Deserialize, Serialize};

/// One catalog record describing an establishment and its amenities.
///
/// Field order mirrors the schema declaration order, so serialized maps
/// come out in the same shape as the table definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    /// Free-text capacity descriptor, e.g. "20-30".
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    /// Free text despite the name; flexible descriptors like "some" are valid.
    pub has_sockets: String,
    pub can_take_calls: bool,
    /// Free-text price descriptor, e.g. "£2.50".
    pub coffee_price: Option<String>,
}

/// Payload for creating a cafe; the id is assigned by the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: String,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}
