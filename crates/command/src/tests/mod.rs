// Test module for line parsers and error rendering

mod report_tests;
