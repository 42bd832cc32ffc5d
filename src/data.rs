use crate::data::student::{Student, StudentFields, StudentId};

pub mod in_memory;
pub mod student;

/// The whole mutation surface the routes are allowed to touch.
pub trait StudentStore {
    /// Assigns the next id and appends the record.
    fn create(&mut self, fields: StudentFields) -> Student;
    /// Every record, in insertion order.
    fn get_all(&self) -> Vec<Student>;
    fn get_by_id(&self, id: StudentId) -> Option<Student>;
    /// Swaps out every field of an existing record in place, keeping its id and position.
    fn replace(&mut self, id: StudentId, fields: StudentFields) -> Option<Student>;
    /// Returns whether anything was removed.
    fn remove(&mut self, id: StudentId) -> bool;
}
