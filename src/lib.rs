pub mod catalog;
pub mod config;
pub mod output;
pub mod parser;
pub mod report;
pub mod structure;
pub mod summary;
