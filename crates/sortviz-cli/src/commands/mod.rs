pub mod common;
pub mod compare;
pub mod config;
pub mod run;
pub mod sorters;
