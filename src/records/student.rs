use time::Date;

/// The fixed subject set every student tracks grades for.
pub const SUBJECTS: [&str; 5] = [
    "Русский язык",
    "Английский язык",
    "Математика",
    "География",
    "Основы программирования",
];

#[derive(Debug)]
pub struct Student {
    // assigned by the manager on insert, 0 until then
    pub id: i32,
    pub name: String,
    pub email: String,
    pub attendance: Vec<AttendanceRecord>,
    pub grades: Gradebook,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub date: Date,
    pub is_present: bool,
}

/// Grades per subject. Subjects are fixed at creation, in the given order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradebook {
    subjects: Vec<(&'static str, Vec<i32>)>,
}

impl Student {
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: 0,
            name,
            email,
            attendance: Vec::new(),
            grades: Gradebook::new(&SUBJECTS),
        }
    }

    /// Average of per-subject totals.
    ///
    /// Every subject with at least one grade contributes the sum of its
    /// grades once, so `{Математика: [10, 20], География: [5]}` gives
    /// `(30 + 5) / 2`. Returns 0 when nothing is graded.
    pub fn average_grade(&self) -> f64 {
        let mut total = 0i64;
        let mut subjects = 0u32;
        for (_, grades) in self.grades.iter() {
            if !grades.is_empty() {
                total += grades.iter().map(|&g| i64::from(g)).sum::<i64>();
                subjects += 1;
            }
        }
        if subjects > 0 {
            total as f64 / f64::from(subjects)
        } else {
            0.0
        }
    }
}

impl AttendanceRecord {
    pub fn new(date: Date, is_present: bool) -> Self {
        Self { date, is_present }
    }
}

impl Gradebook {
    pub fn new(subjects: &[&'static str]) -> Self {
        Self {
            subjects: subjects.iter().map(|&s| (s, Vec::new())).collect(),
        }
    }

    /// Appends a grade. Returns false, leaving the book untouched, when the
    /// subject is not tracked.
    pub fn push(&mut self, subject: &str, grade: i32) -> bool {
        match self.subjects.iter_mut().find(|(name, _)| *name == subject) {
            Some((_, grades)) => {
                grades.push(grade);
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn get(&self, subject: &str) -> Option<&[i32]> {
        self.subjects
            .iter()
            .find(|(name, _)| *name == subject)
            .map(|(_, grades)| grades.as_slice())
    }

    pub fn subject_names(&self) -> Vec<&'static str> {
        self.subjects.iter().map(|(name, _)| *name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[i32])> {
        self.subjects
            .iter()
            .map(|(name, grades)| (*name, grades.as_slice()))
    }
}
