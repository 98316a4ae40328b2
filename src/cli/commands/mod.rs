pub mod config;
pub mod history;
pub mod init;
pub mod list;
pub mod log;
pub mod ports;
pub mod reg;
pub mod run;
pub mod scan;
