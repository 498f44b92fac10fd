//! Controladores de la API

pub mod medico_controller;

pub use medico_controller::MedicoController;
