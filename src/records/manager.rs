use log::{debug, info};

use super::{
    err::{AuthError, RecordError},
    student::{AttendanceRecord, Student},
    user::{User, Users},
    validation::{is_blank, is_valid_email},
};

/// Owns every student and user for the lifetime of the program.
pub struct AttendanceManager {
    students: Vec<Student>,
    next_student_id: i32,
    users: Users,
}

impl AttendanceManager {
    pub fn new(users: Users) -> Self {
        Self {
            students: Vec::new(),
            next_student_id: 1,
            users,
        }
    }

    pub fn authenticate(&self, login: &str, password: &str) -> Result<&User, AuthError> {
        let user = self
            .users
            .get(login)
            .ok_or(AuthError::UserNotFound)?;
        if user.password != password {
            return Err(AuthError::WrongPassword);
        }
        Ok(user)
    }

    /// Store a new student and return the id given to it.
    pub fn add_student(&mut self, mut student: Student) -> Result<i32, RecordError> {
        check_details(&student.name, &student.email)?;

        student.id = self.next_student_id;
        self.next_student_id += 1;
        info!("student {} added with id {}", student.name, student.id);
        let id = student.id;
        self.students.push(student);
        Ok(id)
    }

    pub fn remove_student(&mut self, id: i32) -> Result<Student, RecordError> {
        let index = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or(RecordError::StudentNotFound)?;
        info!("student {} removed", id);
        Ok(self.students.remove(index))
    }

    /// Overwrite name and email. Id, attendance and grades stay as they are.
    pub fn edit_student(&mut self, id: i32, updated: Student) -> Result<(), RecordError> {
        let student = self.find_mut(id)?;
        check_details(&updated.name, &updated.email)?;

        student.name = updated.name;
        student.email = updated.email;
        info!("student {} updated", id);
        Ok(())
    }

    pub fn list_students(&self) -> &[Student] {
        &self.students
    }

    pub fn add_attendance(
        &mut self,
        student_id: i32,
        record: AttendanceRecord,
    ) -> Result<(), RecordError> {
        self.find_mut(student_id)?.attendance.push(record);
        info!("attendance added for student {}", student_id);
        Ok(())
    }

    pub fn list_attendance(&self, student_id: i32) -> Result<&Student, RecordError> {
        self.find(student_id)
    }

    pub fn add_grade(
        &mut self,
        student_id: i32,
        subject: &str,
        grade: i32,
    ) -> Result<(), RecordError> {
        let student = self.find_mut(student_id)?;
        if !student.grades.push(subject, grade) {
            return Err(RecordError::InvalidSubject(student.grades.subject_names()));
        }
        info!("grade {} in {} added for student {}", grade, subject, student_id);
        Ok(())
    }

    pub fn list_grades(&self, student_id: i32) -> Result<&Student, RecordError> {
        self.find(student_id)
    }

    pub fn find_student_by_email(&self, email: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.email == email)
    }

    pub fn find(&self, id: i32) -> Result<&Student, RecordError> {
        debug!("looking up student {}", id);
        self.students
            .iter()
            .find(|s| s.id == id)
            .ok_or(RecordError::StudentNotFound)
    }

    fn find_mut(&mut self, id: i32) -> Result<&mut Student, RecordError> {
        debug!("looking up student {}", id);
        self.students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RecordError::StudentNotFound)
    }
}

fn check_details(name: &str, email: &str) -> Result<(), RecordError> {
    if is_blank(name) {
        return Err(RecordError::EmptyName);
    }
    if !is_valid_email(email) {
        return Err(RecordError::InvalidEmail);
    }
    Ok(())
}
