// Student Roster Tests

use crate::records::{Grade, MAX_STUDENTS, Roster, RosterError, Student};

fn student(name: &str, marks: [i64; 5]) -> Student {
    Student::new(name.to_string(), marks)
}

fn filled(count: usize) -> Roster {
    let mut roster = Roster::new();
    for i in 0..count {
        roster
            .add(student(&format!("s{}", i), [50, 50, 50, 50, 50]))
            .unwrap();
    }
    roster
}

#[test]
fn test_average_and_grade_derivation() {
    let s = student("ana", [90, 95, 88, 92, 100]);
    assert_eq!(s.average(), 93.0);
    assert_eq!(s.grade(), Grade::A);
}

#[test]
fn test_grade_thresholds() {
    assert_eq!(Grade::from_average(90.0), Grade::A);
    assert_eq!(Grade::from_average(89.9), Grade::B);
    assert_eq!(Grade::from_average(75.0), Grade::B);
    assert_eq!(Grade::from_average(60.0), Grade::C);
    assert_eq!(Grade::from_average(59.9), Grade::D);
    assert_eq!(Grade::from_average(40.0), Grade::D);
    assert_eq!(Grade::from_average(39.9), Grade::F);
    assert_eq!(Grade::from_average(0.0), Grade::F);
}

#[test]
fn test_grade_passing() {
    assert!(Grade::A.is_passing());
    assert!(Grade::D.is_passing());
    assert!(!Grade::F.is_passing());
}

#[test]
fn test_set_marks_rederives() {
    let mut s = student("bob", [100, 100, 100, 100, 100]);
    assert_eq!(s.grade(), Grade::A);
    s.set_marks([10, 20, 30, 40, 50]);
    assert_eq!(s.average(), 30.0);
    assert_eq!(s.grade(), Grade::F);
}

#[test]
fn test_add_until_full() {
    let mut roster = filled(MAX_STUDENTS);
    assert_eq!(roster.len(), MAX_STUDENTS);
    // The 51st record is rejected; the count stays put
    let err = roster.add(student("late", [1, 2, 3, 4, 5]));
    assert!(matches!(err, Err(RosterError::Full)));
    assert_eq!(roster.len(), MAX_STUDENTS);
}

#[test]
fn test_find_is_case_sensitive_first_match() {
    let mut roster = Roster::new();
    roster.add(student("Ana", [90, 90, 90, 90, 90])).unwrap();
    roster.add(student("ana", [10, 10, 10, 10, 10])).unwrap();
    assert_eq!(roster.find("ana").unwrap().average(), 10.0);
    assert_eq!(roster.find("Ana").unwrap().average(), 90.0);
    assert!(roster.find("ANA").is_none());
}

#[test]
fn test_update_marks() {
    let mut roster = Roster::new();
    roster.add(student("carl", [40, 40, 40, 40, 40])).unwrap();
    roster.update_marks("carl", [80, 80, 80, 80, 80]).unwrap();
    let s = roster.find("carl").unwrap();
    assert_eq!(s.average(), 80.0);
    assert_eq!(s.grade(), Grade::B);
}

#[test]
fn test_update_missing_changes_nothing() {
    let mut roster = Roster::new();
    roster.add(student("carl", [40, 40, 40, 40, 40])).unwrap();
    let err = roster.update_marks("nobody", [1, 1, 1, 1, 1]);
    assert!(matches!(err, Err(RosterError::NotFound { .. })));
    assert_eq!(roster.find("carl").unwrap().average(), 40.0);
}

#[test]
fn test_delete_middle_shifts_left() {
    let mut roster = Roster::new();
    for name in ["a", "b", "c", "d"] {
        roster.add(student(name, [50, 50, 50, 50, 50])).unwrap();
    }
    roster.delete("b").unwrap();
    assert_eq!(roster.len(), 3);
    let names: Vec<&str> = roster.students().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["a", "c", "d"]);
    assert!(roster.find("b").is_none());
}

#[test]
fn test_delete_missing() {
    let mut roster = filled(2);
    assert!(matches!(
        roster.delete("ghost"),
        Err(RosterError::NotFound { .. })
    ));
    assert_eq!(roster.len(), 2);
}

#[test]
fn test_sort_by_average_descending() {
    let mut roster = Roster::new();
    roster.add(student("low", [10, 10, 10, 10, 10])).unwrap();
    roster.add(student("high", [90, 90, 90, 90, 90])).unwrap();
    roster.add(student("mid", [50, 50, 50, 50, 50])).unwrap();
    roster.sort_by_average();
    let names: Vec<&str> = roster.students().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["high", "mid", "low"]);
}

#[test]
fn test_top_performers_limit() {
    let mut roster = Roster::new();
    for (name, mark) in [("a", 10), ("b", 90), ("c", 50), ("d", 70), ("e", 30)] {
        roster.add(student(name, [mark; 5])).unwrap();
    }
    let top: Vec<&str> = roster.top_performers().iter().map(|s| s.name()).collect();
    assert_eq!(top, vec!["b", "d", "c"]);
}

#[test]
fn test_top_performers_fewer_than_three() {
    let mut roster = Roster::new();
    roster.add(student("only", [60, 60, 60, 60, 60])).unwrap();
    assert_eq!(roster.top_performers().len(), 1);
}

#[test]
fn test_class_stats() {
    let mut roster = Roster::new();
    roster.add(student("pass", [80, 80, 80, 80, 80])).unwrap();
    roster.add(student("fail", [10, 10, 10, 10, 10])).unwrap();
    let stats = roster.class_stats();
    assert_eq!(stats.average, 45.0);
    assert_eq!(stats.passed, 1);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.top, Some(("pass".to_string(), 80.0)));
}

#[test]
fn test_class_stats_top_keeps_first_on_tie() {
    let mut roster = Roster::new();
    roster.add(student("first", [70, 70, 70, 70, 70])).unwrap();
    roster.add(student("second", [70, 70, 70, 70, 70])).unwrap();
    let stats = roster.class_stats();
    assert_eq!(stats.top, Some(("first".to_string(), 70.0)));
}

#[test]
fn test_class_stats_empty_roster() {
    let stats = Roster::new().class_stats();
    assert_eq!(stats.average, 0.0);
    assert_eq!(stats.passed, 0);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.top, None);
}
