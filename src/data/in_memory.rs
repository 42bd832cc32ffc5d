use crate::data::{
    StudentStore,
    student::{Student, StudentFields, StudentId},
};

#[derive(Debug)]
pub struct InMemoryStudentStore {
    students: Vec<Student>,
    next_id: StudentId,
}

impl Default for InMemoryStudentStore {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            next_id: StudentId::FIRST,
        }
    }
}

impl InMemoryStudentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: StudentId) -> Option<usize> {
        self.students.iter().position(|student| student.id == id)
    }
}

impl StudentStore for InMemoryStudentStore {
    fn create(&mut self, fields: StudentFields) -> Student {
        let id = self.next_id;
        self.next_id = id.next();

        let student = Student::new(id, fields);
        self.students.push(student.clone());
        student
    }

    fn get_all(&self) -> Vec<Student> {
        self.students.clone()
    }

    fn get_by_id(&self, id: StudentId) -> Option<Student> {
        self.students.iter().find(|student| student.id == id).cloned()
    }

    fn replace(&mut self, id: StudentId, fields: StudentFields) -> Option<Student> {
        let index = self.position(id)?;
        let replacement = Student::new(id, fields);
        self.students[index] = replacement.clone();
        Some(replacement)
    }

    fn remove(&mut self, id: StudentId) -> bool {
        let before = self.students.len();
        self.students.retain(|student| student.id != id);
        self.students.len() != before
    }
}
