//! Cenit Salud - API REST de personal médico
//!
//! CRUD sobre la tabla `medicos`: validación y normalización de payloads,
//! semántica HTTP y acceso a datos con una conexión MySQL por operación.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod extractors;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
