pub mod diff;
pub mod run;
