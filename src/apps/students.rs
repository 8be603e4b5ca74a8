// Student record manager: CRUD over the bounded roster, ranking, and
// class statistics.

use crate::apps::session::Session;
use algo::records::{MAX_STUDENTS, Roster, Student};
use command::{marks, menu_choice, name};
use std::io::{self, BufRead, Write};

const MENU: &str = "\n==== STUDENT RECORD SYSTEM ====\n\
1. Add New Student\n\
2. Display All Students\n\
3. Update Marks\n\
4. Delete Student\n\
5. Sort by Average\n\
6. Top Performers\n\
7. Search Student\n\
8. Show Class Stats\n\
9. Exit";

enum StudentCmd {
    Add,
    DisplayAll,
    UpdateMarks,
    Delete,
    SortByAverage,
    TopPerformers,
    Search,
    ClassStats,
    Exit,
}

impl StudentCmd {
    fn from_choice(choice: i64) -> Option<StudentCmd> {
        match choice {
            1 => Some(StudentCmd::Add),
            2 => Some(StudentCmd::DisplayAll),
            3 => Some(StudentCmd::UpdateMarks),
            4 => Some(StudentCmd::Delete),
            5 => Some(StudentCmd::SortByAverage),
            6 => Some(StudentCmd::TopPerformers),
            7 => Some(StudentCmd::Search),
            8 => Some(StudentCmd::ClassStats),
            9 => Some(StudentCmd::Exit),
            _ => None,
        }
    }
}

pub fn run<R: BufRead, W: Write>(input: R, out: W) -> io::Result<()> {
    let mut session = Session::new(input, out);
    let mut roster = Roster::new();

    loop {
        session.say(MENU)?;
        let Some(choice) = session.read("Enter your choice: ", &menu_choice())? else {
            return Ok(());
        };
        let Some(cmd) = StudentCmd::from_choice(choice) else {
            session.say("Invalid choice, try again.")?;
            continue;
        };

        match cmd {
            StudentCmd::Add => {
                // Capacity is checked before any input is read
                if roster.len() >= MAX_STUDENTS {
                    session.say("Maximum student limit reached.")?;
                    continue;
                }
                let Some(student_name) = session.read("Enter student name: ", &name())? else {
                    return Ok(());
                };
                let Some(student_marks) = session.read("Enter marks in 5 subjects: ", &marks())?
                else {
                    return Ok(());
                };
                match roster.add(Student::new(student_name, student_marks)) {
                    Ok(()) => session.say("Student added successfully.")?,
                    Err(_) => session.say("Maximum student limit reached.")?,
                }
            }
            StudentCmd::DisplayAll => {
                if roster.is_empty() {
                    session.say("No records to display.")?;
                } else {
                    writeln!(session.out)?;
                    writeln!(session.out, "{:<15}  {:<10}  {:<10}", "Name", "Average", "Grade")?;
                    writeln!(session.out, "-------------------------------------")?;
                    for student in roster.students() {
                        writeln!(
                            session.out,
                            "{:<15}  {:>8.2}  {:>5}",
                            student.name(),
                            student.average(),
                            student.grade()
                        )?;
                    }
                }
            }
            StudentCmd::UpdateMarks => {
                let Some(target) = session.read("Enter name to update marks: ", &name())? else {
                    return Ok(());
                };
                if roster.find(&target).is_none() {
                    session.say("Student not found!")?;
                    continue;
                }
                let prompt = format!("Enter new marks for {}:\n", target);
                let Some(new_marks) = session.read(&prompt, &marks())? else {
                    return Ok(());
                };
                match roster.update_marks(&target, new_marks) {
                    Ok(()) => session.say("Marks updated successfully.")?,
                    Err(_) => session.say("Student not found!")?,
                }
            }
            StudentCmd::Delete => {
                let Some(target) = session.read("Enter name to delete: ", &name())? else {
                    return Ok(());
                };
                match roster.delete(&target) {
                    Ok(()) => session.say("Record deleted successfully.")?,
                    Err(_) => session.say("Student not found!")?,
                }
            }
            StudentCmd::SortByAverage => {
                if roster.len() > 1 {
                    roster.sort_by_average();
                    session.say("Students sorted by average (descending).")?;
                } else {
                    session.say("Not enough students to sort.")?;
                }
            }
            StudentCmd::TopPerformers => {
                if roster.is_empty() {
                    session.say("No student records.")?;
                    continue;
                }
                session.say("Students sorted by average (descending).")?;
                let top = roster.top_performers();
                writeln!(session.out, "\nTop {} Performers:", top.len())?;
                for student in top {
                    writeln!(
                        session.out,
                        "{:<15}  Avg: {:6.2}  Grade: {}",
                        student.name(),
                        student.average(),
                        student.grade()
                    )?;
                }
            }
            StudentCmd::Search => {
                let Some(target) = session.read("Enter name to search: ", &name())? else {
                    return Ok(());
                };
                match roster.find(&target) {
                    Some(student) => {
                        writeln!(
                            session.out,
                            "{:<15}  Avg: {:6.2}  Grade: {}",
                            student.name(),
                            student.average(),
                            student.grade()
                        )?;
                    }
                    None => session.say("Student not found.")?,
                }
            }
            StudentCmd::ClassStats => {
                let stats = roster.class_stats();
                writeln!(session.out, "\nClass Average: {:.2}", stats.average)?;
                writeln!(session.out, "Passed: {} | Failed: {}", stats.passed, stats.failed)?;
                if let Some((top_name, top_avg)) = stats.top {
                    writeln!(session.out, "Top Student: {} ({:.2})", top_name, top_avg)?;
                }
            }
            StudentCmd::Exit => {
                session.say("Exiting program...")?;
                return Ok(());
            }
        }
    }
}
