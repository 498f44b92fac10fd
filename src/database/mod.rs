//! Módulo de base de datos
//!
//! Maneja las conexiones con MySQL

pub mod connection;

pub use connection::DatabaseConnection;
