// Reduced sort/search menu: ascending-only bubble/insertion sort plus
// binary search, sharing the extended menu's startup and reporting.

use crate::apps::array::{display, read_elements, report_index};
use crate::apps::session::Session;
use algo::sort::{binary_search, bubble_sort, insertion_sort, is_sorted, Order};
use command::menu_choice;
use std::io::{self, BufRead, Write};

const MENU: &str = "\nMenu:\n\
1. Bubble Sort\n\
2. Insertion Sort\n\
3. Binary Search\n\
4. Display\n\
5. Exit";

enum BasicCmd {
    Bubble,
    Insertion,
    BinarySearch,
    Display,
    Exit,
}

impl BasicCmd {
    fn from_choice(choice: i64) -> Option<BasicCmd> {
        match choice {
            1 => Some(BasicCmd::Bubble),
            2 => Some(BasicCmd::Insertion),
            3 => Some(BasicCmd::BinarySearch),
            4 => Some(BasicCmd::Display),
            5 => Some(BasicCmd::Exit),
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
        let Some(choice) = session.read("Enter choice: ", &menu_choice())? else {
            return Ok(());
        };
        let Some(cmd) = BasicCmd::from_choice(choice) else {
            session.say("Invalid choice.")?;
            continue;
        };

        match cmd {
            BasicCmd::Bubble => {
                bubble_sort(arr.as_mut_slice(), Order::Ascending);
                session.say("Array sorted using Bubble Sort.")?;
            }
            BasicCmd::Insertion => {
                insertion_sort(arr.as_mut_slice(), Order::Ascending);
                session.say("Array sorted using Insertion Sort.")?;
            }
            BasicCmd::BinarySearch => {
                let Some(target) = session.read("Enter element to search: ", &menu_choice())?
                else {
                    return Ok(());
                };
                if !is_sorted(arr.as_slice(), Order::Ascending) {
                    session.say("Array not sorted ascending! Sorting first...")?;
                    bubble_sort(arr.as_mut_slice(), Order::Ascending);
                }
                report_index(&mut session, binary_search(arr.as_slice(), target))?;
            }
            BasicCmd::Display => display(&mut session, arr.as_slice())?,
            BasicCmd::Exit => {
                session.say("Exiting program.")?;
                return Ok(());
            }
        }
    }
}
