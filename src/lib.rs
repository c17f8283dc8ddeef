pub mod backend;
pub mod capture;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod io;
