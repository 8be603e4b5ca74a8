// Test module for the console input lexer
//
// Tests are organized by category: plain token recognition and the
// span-preserving entry point with its edge cases.
