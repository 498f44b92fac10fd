use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use cenit_salud::config::EnvironmentConfig;
use cenit_salud::models::Medico;
use cenit_salud::repositories::MedicoStore;
use cenit_salud::routes::create_app;
use cenit_salud::state::AppState;
use cenit_salud::utils::errors::{AppError, AppResult};

/// Store en memoria con contador de llamadas y fallos de escritura inyectables
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<BTreeMap<i64, Medico>>,
    next_id: AtomicUsize,
    pub calls: AtomicUsize,
    pub fail_writes: std::sync::atomic::AtomicBool,
}

impl MemoryStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn row(&self, id: i64) -> Option<Medico> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    pub fn seed(&self, nombre: &str, especialidad: &str, correo_interno: &str) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        self.rows.lock().unwrap().insert(
            id,
            Medico {
                id_medico: id,
                nombre: nombre.to_string(),
                especialidad: especialidad.to_string(),
                correo_interno: correo_interno.to_string(),
            },
        );
        id
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn writes_fail(&self) -> bool {
        self.fail_writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MedicoStore for MemoryStore {
    async fn list_all(&self) -> AppResult<Vec<Medico>> {
        self.touch();
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Medico>> {
        self.touch();
        Ok(self.row(id))
    }

    async fn create(
        &self,
        nombre: &str,
        especialidad: &str,
        correo_interno: &str,
    ) -> AppResult<i64> {
        self.touch();
        if self.writes_fail() {
            return Err(AppError::Persistence(
                "Error crítico al insertar el médico".to_string(),
            ));
        }
        Ok(self.seed(nombre, especialidad, correo_interno))
    }

    async fn update(
        &self,
        id: i64,
        nombre: &str,
        especialidad: &str,
        correo_interno: &str,
    ) -> AppResult<bool> {
        self.touch();
        if self.writes_fail() {
            return Ok(false);
        }
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(row) => {
                row.nombre = nombre.to_string();
                row.especialidad = especialidad.to_string();
                row.correo_interno = correo_interno.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        self.touch();
        if self.writes_fail() {
            return Ok(false);
        }
        Ok(self.rows.lock().unwrap().remove(&id).is_some())
    }
}

pub struct TestApp {
    pub store: Arc<MemoryStore>,
    router: Router,
}

pub struct TestResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let router = create_app(AppState::new(store.clone(), EnvironmentConfig::default()));
        Self { store, router }
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    pub async fn request_raw(&self, method: &str, uri: &str, raw: &str) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status().as_u16();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into()))
        };

        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: serde_json::Value) -> TestResponse {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: serde_json::Value) -> TestResponse {
        self.request("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request("DELETE", uri, None).await
    }
}
