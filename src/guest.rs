use std::fmt;

use serde::{Deserialize, Serialize};

// Guest profile as entered at the front desk, never modified after construction
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Guest {
    name: String,
    age: u32,
    contact: String,
}

impl Guest {
    pub fn new(name: impl Into<String>, age: u32, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            contact: contact.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
