use uuid::Uuid;

pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs in lowercase hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
