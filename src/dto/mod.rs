//! Objetos de transferencia de la API

pub mod health_dto;
pub mod medico_dto;
