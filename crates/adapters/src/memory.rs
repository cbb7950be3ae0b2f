use std::cell::RefCell;
use std::collections::HashMap;

use meme_room_application::{ApplicationError, KeyValueStore};

/// Non-durable store for throwaway sessions.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    values: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn initialize(&self) -> Result<(), ApplicationError> {
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ApplicationError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}
