use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::mem_store::{MemStore, Record};

/// A grouping label todos can reference by id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Record for Category {
    type Input = CategoryInput;
    const ENTITY: &'static str = "Category";

    fn id(&self) -> &str { &self.id }

    fn build(id: String, created_at: DateTime<Utc>, input: CategoryInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            color: input.color,
            created_at,
        }
    }

    fn replace(&mut self, input: CategoryInput) {
        self.name = input.name;
        self.description = input.description;
        self.color = input.color;
    }
}

pub type CategoryStore = MemStore<Category>;

/// Sample records the store starts with.
pub fn seed() -> Vec<Category> {
    let now = Utc::now();
    vec![
        Category {
            id: "category-1".into(),
            name: "Work".into(),
            description: Some("Work-related tasks".into()),
            color: Some("#FF5733".into()),
            created_at: now,
        },
        Category {
            id: "category-2".into(),
            name: "Personal".into(),
            description: Some("Personal errands and tasks".into()),
            color: Some("#33FF57".into()),
            created_at: now,
        },
    ]
}

/// A seeded store, the configuration the server boots with.
pub fn seeded_store() -> CategoryStore {
    MemStore::with_seed(seed())
}
