//! Student records and the class-set mutations applied to them

mod student;

use std::collections::HashMap;

use thiserror::Error;

use crate::schedule::{ClassCode, ClassTable};

pub use student::{Student, StudentId, StudentName};

/// Default cap on classes per student at insertion
pub const DEFAULT_MAX_CLASSES: usize = 6;

/// Reasons a roster mutation is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("student already exists: {0}")]
    DuplicateStudent(StudentId),

    #[error("student not found: {0}")]
    UnknownStudent(StudentId),

    #[error("class not found: {0}")]
    UnknownClass(ClassCode),

    #[error("student {student} is not enrolled in {code}")]
    NotEnrolled { student: StudentId, code: ClassCode },

    #[error("student {student} is already enrolled in {code}")]
    AlreadyEnrolled { student: StudentId, code: ClassCode },

    #[error("class count {count} outside 1..={max}")]
    ClassCount { count: usize, max: usize },
}

/// Outcome of dropping a single class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Dropped,
    /// The class was the student's last one, so the student was removed
    DroppedAndRemoved,
}

#[derive(Debug, Clone)]
pub struct Roster {
    students: HashMap<StudentId, Student>,
    max_classes: usize,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CLASSES)
    }
}

impl Roster {
    pub fn new(max_classes: usize) -> Self {
        Self {
            students: HashMap::new(),
            max_classes,
        }
    }

    pub fn max_classes(&self) -> usize {
        self.max_classes
    }

    pub fn get(&self, id: &StudentId) -> Option<&Student> {
        self.students.get(id)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Add a new student whose classes all exist in `classes`
    pub fn insert(&mut self, student: Student, classes: &ClassTable) -> Result<(), RosterError> {
        let count = student.classes.len();
        if count == 0 || count > self.max_classes {
            return Err(RosterError::ClassCount {
                count,
                max: self.max_classes,
            });
        }
        if let Some(unknown) = student.classes.iter().find(|c| !classes.contains(c.as_str())) {
            return Err(RosterError::UnknownClass(unknown.clone()));
        }
        if self.students.contains_key(&student.id) {
            return Err(RosterError::DuplicateStudent(student.id));
        }

        tracing::debug!(student = %student.id, classes = count, "student inserted");
        self.students.insert(student.id.clone(), student);
        Ok(())
    }

    pub fn remove(&mut self, id: &StudentId) -> Result<Student, RosterError> {
        self.students
            .remove(id)
            .ok_or_else(|| RosterError::UnknownStudent(id.clone()))
    }

    /// Drop one class; a student left with no classes is removed
    pub fn drop_class(
        &mut self,
        id: &StudentId,
        code: &ClassCode,
    ) -> Result<DropOutcome, RosterError> {
        let student = self
            .students
            .get_mut(id)
            .ok_or_else(|| RosterError::UnknownStudent(id.clone()))?;

        if !student.classes.remove(code) {
            return Err(RosterError::NotEnrolled {
                student: id.clone(),
                code: code.clone(),
            });
        }

        if student.classes.is_empty() {
            self.students.remove(id);
            return Ok(DropOutcome::DroppedAndRemoved);
        }
        Ok(DropOutcome::Dropped)
    }

    /// Swap `old` for `new` in a student's class set
    pub fn replace_class(
        &mut self,
        id: &StudentId,
        old: &ClassCode,
        new: &ClassCode,
        classes: &ClassTable,
    ) -> Result<(), RosterError> {
        let student = self
            .students
            .get_mut(id)
            .ok_or_else(|| RosterError::UnknownStudent(id.clone()))?;

        if !classes.contains(new.as_str()) {
            return Err(RosterError::UnknownClass(new.clone()));
        }
        if !student.classes.contains(old) {
            return Err(RosterError::NotEnrolled {
                student: id.clone(),
                code: old.clone(),
            });
        }
        if student.classes.contains(new) {
            return Err(RosterError::AlreadyEnrolled {
                student: id.clone(),
                code: new.clone(),
            });
        }

        student.classes.remove(old);
        student.classes.insert(new.clone());
        Ok(())
    }

    /// Drop `code` from every student holding it
    ///
    /// Returns the number of students affected, including any removed
    /// because the class was their last.
    pub fn remove_class_everywhere(&mut self, code: &ClassCode) -> usize {
        let holders: Vec<StudentId> = self
            .students
            .values()
            .filter(|s| s.classes.contains(code))
            .map(|s| s.id.clone())
            .collect();

        for id in &holders {
            if let Some(student) = self.students.get_mut(id) {
                student.classes.remove(code);
                if student.classes.is_empty() {
                    self.students.remove(id);
                }
            }
        }

        tracing::debug!(%code, affected = holders.len(), "class removed from roster");
        holders.len()
    }
}
