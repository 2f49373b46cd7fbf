mod pad_tests;
mod print_tests;
