//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema MySQL.

pub mod medico;

pub use medico::Medico;
