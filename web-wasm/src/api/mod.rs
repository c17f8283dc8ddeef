//! Acceso al servidor

pub mod backend;

pub use backend::FetchBackend;
