pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod merge;
pub mod processor;
pub mod retry;
pub mod store;
pub mod translate;
pub mod tree;
