pub mod dump;
pub mod report;
pub mod run;
pub mod run_common;
pub mod trace;

#[cfg(test)]
mod report_tests;
#[cfg(test)]
mod run_common_tests;
