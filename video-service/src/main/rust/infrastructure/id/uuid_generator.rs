use uuid::Uuid;

use crate::application::ports::IdGenerator;

/// Random (v4) UUIDs in canonical hyphenated form
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
