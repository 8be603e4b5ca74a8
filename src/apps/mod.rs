pub mod array;
pub mod array_basic;
pub mod matrix;
pub mod session;
pub mod students;
