//! Integration test harness for lrp.

mod helpers;

mod cli_test;
mod parse_test;
mod shift_test;
