// src/validation/tests/mod.rs

mod helper_tests;
