use serde::{Deserialize, Serialize};

// Configuration abstracts config options for the book store service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub table_name: String,
}

impl Configuration {
    pub fn new(table_name: &str) -> Self {
        Configuration {
            table_name: table_name.to_string(),
        }
    }
}
