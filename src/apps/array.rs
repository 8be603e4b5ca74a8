// Extended sort/search menu: four direction-aware sorts, two searches,
// min/max, sortedness classification, reverse.

use crate::apps::session::Session;
use algo::sort::{
    binary_search, bubble_sort, find_max, find_min, insertion_sort, is_sorted, linear_search,
    merge_sort, reverse, selection_sort, CAPACITY, IntArray, Order,
};
use command::{int_list, menu_choice};
use std::io::{self, BufRead, Write};

const MENU: &str = "\n=== MENU ===\n\
1. Bubble Sort\n\
2. Insertion Sort\n\
3. Selection Sort\n\
4. Merge Sort\n\
5. Binary Search\n\
6. Linear Search\n\
7. Find Min & Max\n\
8. Check whether Sorted\n\
9. Reverse Array\n\
10. Display\n\
11. Exit";

enum ArrayCmd {
    Sort(SortKind),
    BinarySearch,
    LinearSearch,
    MinMax,
    SortedCheck,
    Reverse,
    Display,
    Exit,
}

#[derive(Clone, Copy)]
enum SortKind {
    Bubble,
    Insertion,
    Selection,
    Merge,
}

impl SortKind {
    fn name(self) -> &'static str {
        match self {
            SortKind::Bubble => "Bubble Sort",
            SortKind::Insertion => "Insertion Sort",
            SortKind::Selection => "Selection Sort",
            SortKind::Merge => "Merge Sort",
        }
    }

    fn apply(self, arr: &mut [i64], order: Order) {
        match self {
            SortKind::Bubble => bubble_sort(arr, order),
            SortKind::Insertion => insertion_sort(arr, order),
            SortKind::Selection => selection_sort(arr, order),
            SortKind::Merge => merge_sort(arr, order),
        }
    }
}

impl ArrayCmd {
    fn from_choice(choice: i64) -> Option<ArrayCmd> {
        match choice {
            1 => Some(ArrayCmd::Sort(SortKind::Bubble)),
            2 => Some(ArrayCmd::Sort(SortKind::Insertion)),
            3 => Some(ArrayCmd::Sort(SortKind::Selection)),
            4 => Some(ArrayCmd::Sort(SortKind::Merge)),
            5 => Some(ArrayCmd::BinarySearch),
            6 => Some(ArrayCmd::LinearSearch),
            7 => Some(ArrayCmd::MinMax),
            8 => Some(ArrayCmd::SortedCheck),
            9 => Some(ArrayCmd::Reverse),
            10 => Some(ArrayCmd::Display),
            11 => Some(ArrayCmd::Exit),
            _ => None,
        }
    }
}

pub fn run<R: BufRead, W: Write>(input: R, out: W) -> io::Result<()> {
    let mut session = Session::new(input, out);

    let Some(mut arr) = read_elements(&mut session)? else {
        return Ok(());
    };

    loop {
        session.say(MENU)?;
        let Some(choice) = session.read("Enter your choice: ", &menu_choice())? else {
            return Ok(());
        };
        let Some(cmd) = ArrayCmd::from_choice(choice) else {
            session.say("Invalid choice.")?;
            continue;
        };

        match cmd {
            ArrayCmd::Sort(kind) => {
                let Some(flag) =
                    session.read("Sort order (1=Ascending, 0=Descending): ", &menu_choice())?
                else {
                    return Ok(());
                };
                let order = if flag == 0 {
                    Order::Descending
                } else {
                    Order::Ascending
                };
                kind.apply(arr.as_mut_slice(), order);
                writeln!(session.out, "Array sorted using {}.", kind.name())?;
            }
            ArrayCmd::BinarySearch => {
                let Some(target) = session.read("Enter element to search: ", &menu_choice())?
                else {
                    return Ok(());
                };
                // Precondition repair: binary search needs ascending order,
                // and the sort is a visible side effect on the array.
                if !is_sorted(arr.as_slice(), Order::Ascending) {
                    session.say("Array not sorted ascending! Sorting first...")?;
                    bubble_sort(arr.as_mut_slice(), Order::Ascending);
                }
                report_index(&mut session, binary_search(arr.as_slice(), target))?;
            }
            ArrayCmd::LinearSearch => {
                let Some(target) = session.read("Enter element to search: ", &menu_choice())?
                else {
                    return Ok(());
                };
                report_index(&mut session, linear_search(arr.as_slice(), target))?;
            }
            ArrayCmd::MinMax => {
                if let (Some(min), Some(max)) = (find_min(arr.as_slice()), find_max(arr.as_slice()))
                {
                    writeln!(session.out, "Min = {}, Max = {}", min, max)?;
                }
            }
            ArrayCmd::SortedCheck => {
                if is_sorted(arr.as_slice(), Order::Ascending) {
                    session.say("Array is sorted in ascending order.")?;
                } else if is_sorted(arr.as_slice(), Order::Descending) {
                    session.say("Array is sorted in descending order.")?;
                } else {
                    session.say("Array is not sorted.")?;
                }
            }
            ArrayCmd::Reverse => {
                reverse(arr.as_mut_slice());
                session.say("Array reversed.")?;
            }
            ArrayCmd::Display => display(&mut session, arr.as_slice())?,
            ArrayCmd::Exit => {
                session.say("Exiting program.")?;
                return Ok(());
            }
        }
    }
}

/// Startup: declared count first, then the elements on one line.
pub(super) fn read_elements<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> io::Result<Option<IntArray>> {
    let Some(n) = session.read("Enter number of elements (<=100): ", &menu_choice())? else {
        return Ok(None);
    };
    if n < 1 || n > CAPACITY as i64 {
        session.say("Invalid size.")?;
        return Ok(None);
    }

    let prompt = format!("Enter {} elements:\n", n);
    let Some(values) = session.read(&prompt, &int_list(n as usize))? else {
        return Ok(None);
    };
    match IntArray::from_vec(values) {
        Ok(arr) => Ok(Some(arr)),
        Err(_) => {
            session.say("Invalid size.")?;
            Ok(None)
        }
    }
}

pub(super) fn report_index<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    index: Option<usize>,
) -> io::Result<()> {
    match index {
        Some(idx) => writeln!(session.out, "Element found at index {}", idx),
        None => session.say("Element not found."),
    }
}

pub(super) fn display<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    arr: &[i64],
) -> io::Result<()> {
    for value in arr {
        write!(session.out, "{} ", value)?;
    }
    writeln!(session.out)
}
