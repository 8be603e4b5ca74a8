// Algorithm Test Modules

mod records_tests;
mod sort_tests;
