//! Type list display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::NamedResource;
use crate::output::formatters::format_type;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TypeDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "TYPE")]
    pub name: String,

    /// Records of this type among those loaded locally
    #[tabled(rename = "LOADED")]
    pub loaded: usize,
}

impl TypeDisplay {
    pub fn new(resource: &NamedResource, loaded: usize) -> Self {
        Self {
            id: resource.id().map(|id| id.to_string()).unwrap_or_default(),
            name: format_type(&resource.name),
            loaded,
        }
    }
}
