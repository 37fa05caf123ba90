use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::mem_store::{MemStore, Record};

/// A single todo item. `category_id` is a loose reference: it may point at a
/// category that no longer exists, and nothing validates it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Create/update input: everything but id/created_at, which the store owns.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TodoInput {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl Record for Todo {
    type Input = TodoInput;
    const ENTITY: &'static str = "Todo";

    fn id(&self) -> &str { &self.id }

    fn build(id: String, created_at: DateTime<Utc>, input: TodoInput) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            completed: input.completed,
            category_id: input.category_id,
            due_date: input.due_date,
            created_at,
        }
    }

    fn replace(&mut self, input: TodoInput) {
        self.title = input.title;
        self.description = input.description;
        self.completed = input.completed;
        self.category_id = input.category_id;
        self.due_date = input.due_date;
    }
}

impl Todo {
    /// Equality filter on completion status; records with no completion
    /// value match neither `true` nor `false`.
    pub fn matches_completed(&self, wanted: Option<bool>) -> bool {
        match wanted {
            Some(w) => self.completed == Some(w),
            None => true,
        }
    }
}

pub type TodoStore = MemStore<Todo>;

/// Sample records the store starts with.
pub fn seed() -> Vec<Todo> {
    let now = Utc::now();
    let tomorrow = now + Duration::days(1);
    vec![
        Todo {
            id: "todo-1".into(),
            title: "Complete project".into(),
            description: Some("Finish the API project by tomorrow".into()),
            completed: Some(false),
            category_id: Some("category-1".into()),
            due_date: Some(tomorrow),
            created_at: now,
        },
        Todo {
            id: "todo-2".into(),
            title: "Buy groceries".into(),
            description: Some("Milk, eggs, bread".into()),
            completed: Some(true),
            category_id: Some("category-2".into()),
            due_date: None,
            created_at: now,
        },
    ]
}

/// A seeded store, the configuration the server boots with.
pub fn seeded_store() -> TodoStore {
    MemStore::with_seed(seed())
}
