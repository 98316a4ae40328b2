pub mod command;
pub mod config;
pub mod history;
pub mod ledger;
pub mod log;
pub mod run;
pub mod session;
