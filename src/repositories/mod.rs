//! Repositorios de acceso a datos

pub mod medico_repository;

pub use medico_repository::{MedicoStore, MySqlMedicoRepository};
