pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod reconciler;
pub mod scanner;
pub mod sheet;
