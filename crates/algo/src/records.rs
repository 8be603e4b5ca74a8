// The student roster: a bounded append-list of records with derived fields.
//
// Average and grade are recomputed whenever marks change; they are never
// stored stale. Name lookup is exact and case-sensitive, first match wins.

use std::fmt;

/// Roster capacity
pub const MAX_STUDENTS: usize = 50;

/// Marks per student
pub const SUBJECTS: usize = 5;

/// Number of leaders reported by the top-performers query
pub const TOP_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_average(avg: f64) -> Grade {
        if avg >= 90.0 {
            Grade::A
        } else if avg >= 75.0 {
            Grade::B
        } else if avg >= 60.0 {
            Grade::C
        } else if avg >= 40.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    /// Everything except F passes.
    pub fn is_passing(self) -> bool {
        self != Grade::F
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::F => 'F',
        };
        write!(f, "{}", letter)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    marks: [i64; SUBJECTS],
    average: f64,
    grade: Grade,
}

impl Student {
    pub fn new(name: String, marks: [i64; SUBJECTS]) -> Student {
        let average = mean(&marks);
        Student {
            name,
            marks,
            average,
            grade: Grade::from_average(average),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marks(&self) -> &[i64; SUBJECTS] {
        &self.marks
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Overwrite the marks and rederive average and grade.
    pub fn set_marks(&mut self, marks: [i64; SUBJECTS]) {
        self.marks = marks;
        self.average = mean(&marks);
        self.grade = Grade::from_average(self.average);
    }
}

fn mean(marks: &[i64; SUBJECTS]) -> f64 {
    marks.iter().sum::<i64>() as f64 / SUBJECTS as f64
}

#[derive(Debug, Clone)]
pub enum RosterError {
    /// Add against a full roster
    Full,

    /// Lookup by a name no record carries
    NotFound { name: String },
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::Full => write!(f, "roster is full ({} records)", MAX_STUDENTS),
            RosterError::NotFound { name } => write!(f, "no student named '{}'", name),
        }
    }
}

impl std::error::Error for RosterError {}

/// Class-wide summary. `top` is picked by a forward scan that replaces the
/// running leader only on a strictly greater average, so the first record
/// wins ties.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassStats {
    pub average: f64,
    pub passed: usize,
    pub failed: usize,
    pub top: Option<(String, f64)>,
}

#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Roster {
        Roster::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Append a record; rejected once at capacity.
    pub fn add(&mut self, student: Student) -> Result<(), RosterError> {
        if self.students.len() >= MAX_STUDENTS {
            return Err(RosterError::Full);
        }
        self.students.push(student);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.name == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.students.iter().position(|s| s.name == name)
    }

    /// Overwrite the named student's marks; derived fields follow.
    pub fn update_marks(&mut self, name: &str, marks: [i64; SUBJECTS]) -> Result<(), RosterError> {
        match self.position(name) {
            Some(idx) => {
                self.students[idx].set_marks(marks);
                Ok(())
            }
            None => Err(RosterError::NotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Remove the named record; later records shift left by one, so survivor
    /// order is preserved.
    pub fn delete(&mut self, name: &str) -> Result<(), RosterError> {
        match self.position(name) {
            Some(idx) => {
                self.students.remove(idx);
                Ok(())
            }
            None => Err(RosterError::NotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Adjacent-swap sort, descending by average. Not stable under duplicate
    /// averages; that is the documented behavior.
    pub fn sort_by_average(&mut self) {
        let n = self.students.len();
        for i in 0..n.saturating_sub(1) {
            for j in 0..n - i - 1 {
                if self.students[j].average < self.students[j + 1].average {
                    self.students.swap(j, j + 1);
                }
            }
        }
    }

    /// Sort descending, then expose the min(3, count) leaders.
    pub fn top_performers(&mut self) -> &[Student] {
        self.sort_by_average();
        let limit = self.students.len().min(TOP_COUNT);
        &self.students[..limit]
    }

    pub fn class_stats(&self) -> ClassStats {
        if self.students.is_empty() {
            return ClassStats {
                average: 0.0,
                passed: 0,
                failed: 0,
                top: None,
            };
        }
        let total: f64 = self.students.iter().map(|s| s.average).sum();
        let failed = self
            .students
            .iter()
            .filter(|s| !s.grade.is_passing())
            .count();

        let mut top: Option<&Student> = None;
        for student in &self.students {
            if top.is_none_or(|t| student.average > t.average) {
                top = Some(student);
            }
        }

        ClassStats {
            average: total / self.students.len() as f64,
            passed: self.students.len() - failed,
            failed,
            top: top.map(|s| (s.name.clone(), s.average)),
        }
    }
}
