// Matrix operations menu.
//
// Two matrices are read up front; every menu entry produces a fresh result
// (or a refusal) without touching the operands.

use crate::apps::session::Session;
use algo::matrix::{Matrix, MatrixError, MAX_DIM};
use command::{dims, int_list, menu_choice};
use std::io::{self, BufRead, Write};

const MENU: &str = "\n==== MATRIX MENU ====\n\
1. Add\n\
2. Subtract\n\
3. Multiply\n\
4. Transpose\n\
5. Symmetric Check\n\
6. Determinant\n\
7. Inverse (2x2 or 3x3)\n\
8. Exit";

enum MatrixCmd {
    Add,
    Subtract,
    Multiply,
    Transpose,
    SymmetricCheck,
    Determinant,
    Inverse,
    Exit,
}

impl MatrixCmd {
    fn from_choice(choice: i64) -> Option<MatrixCmd> {
        match choice {
            1 => Some(MatrixCmd::Add),
            2 => Some(MatrixCmd::Subtract),
            3 => Some(MatrixCmd::Multiply),
            4 => Some(MatrixCmd::Transpose),
            5 => Some(MatrixCmd::SymmetricCheck),
            6 => Some(MatrixCmd::Determinant),
            7 => Some(MatrixCmd::Inverse),
            8 => Some(MatrixCmd::Exit),
            _ => None,
        }
    }
}

pub fn run<R: BufRead, W: Write>(input: R, out: W) -> io::Result<()> {
    let mut session = Session::new(input, out);

    let Some((r1, c1)) = session.read("Enter rows and columns of Matrix A: ", &dims())? else {
        return Ok(());
    };
    let Some((r2, c2)) = session.read("Enter rows and columns of Matrix B: ", &dims())? else {
        return Ok(());
    };

    if r1 > MAX_DIM || c1 > MAX_DIM || r2 > MAX_DIM || c2 > MAX_DIM {
        session.say("Matrix size too large!")?;
        return Ok(());
    }

    let Some(a) = read_matrix(&mut session, "A", r1, c1)? else {
        return Ok(());
    };
    let Some(b) = read_matrix(&mut session, "B", r2, c2)? else {
        return Ok(());
    };

    loop {
        session.say(MENU)?;
        let Some(choice) = session.read("Choice: ", &menu_choice())? else {
            return Ok(());
        };
        let Some(cmd) = MatrixCmd::from_choice(choice) else {
            session.say("Invalid choice. Try again.")?;
            continue;
        };

        match cmd {
            MatrixCmd::Add => match a.add(&b) {
                Ok(sum) => {
                    session.say("A + B = ")?;
                    writeln!(session.out, "{}", sum)?;
                }
                Err(_) => session.say("Addition not possible (dimension mismatch)")?,
            },
            MatrixCmd::Subtract => match a.sub(&b) {
                Ok(diff) => {
                    session.say("A - B = ")?;
                    writeln!(session.out, "{}", diff)?;
                }
                Err(_) => session.say("Subtraction not possible.")?,
            },
            MatrixCmd::Multiply => match a.mul(&b) {
                Ok(product) => {
                    session.say("A x B = ")?;
                    writeln!(session.out, "{}", product)?;
                }
                Err(_) => session.say("Multiplication not possible.")?,
            },
            MatrixCmd::Transpose => {
                session.say("Transpose of A:")?;
                writeln!(session.out, "{}", a.transpose())?;
            }
            MatrixCmd::SymmetricCheck => {
                if a.is_symmetric() {
                    session.say("Matrix A is symmetric.")?;
                } else {
                    session.say("Matrix A is not symmetric.")?;
                }
            }
            MatrixCmd::Determinant => match a.determinant() {
                Ok(det) => {
                    writeln!(session.out, "Determinant of A = {:.2}", det)?;
                }
                Err(_) => session.say("Determinant supported only for 2x2 or 3x3.")?,
            },
            MatrixCmd::Inverse => match a.inverse() {
                Ok(inv) => {
                    writeln!(
                        session.out,
                        "Inverse of the {}x{} matrix:",
                        a.rows(),
                        a.cols()
                    )?;
                    for row in &inv {
                        for cell in row {
                            write!(session.out, "{:8.2}", cell)?;
                        }
                        writeln!(session.out)?;
                    }
                }
                Err(MatrixError::Singular) => {
                    session.say("Matrix not invertible (determinant = 0)")?;
                }
                Err(_) => session.say("Inverse supported only for 2x2 or 3x3.")?,
            },
            MatrixCmd::Exit => {
                session.say("Exiting...")?;
                return Ok(());
            }
        }
    }
}

fn read_matrix<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    label: &str,
    rows: usize,
    cols: usize,
) -> io::Result<Option<Matrix>> {
    writeln!(session.out, "Enter elements for Matrix {}:", label)?;
    let mut matrix = Matrix::zeroed(rows, cols);
    for i in 0..rows {
        let Some(row) = session.read(&format!("Row {}: ", i), &int_list(cols))? else {
            return Ok(None);
        };
        for (j, value) in row.into_iter().enumerate() {
            matrix.set(i, j, value);
        }
    }
    Ok(Some(matrix))
}
