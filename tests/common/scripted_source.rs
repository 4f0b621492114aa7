//! In-memory `CatalogSource` whose responses the test releases by hand.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Semaphore;

use pokedex::schema::{CatalogEntity, EntityDetail, EntityKey};
use pokedex::source::{CatalogSource, QueryError};

pub const CATALOG_GATE: &str = "catalog";

/// Scripted source.
///
/// Requests for a held label block until [`ScriptedSource::release`] is
/// called for it. Labels are `"catalog"` or the key's display form
/// (`"name:bulbasaur"`, `"id:..."`).
#[derive(Default)]
pub struct ScriptedSource {
    catalog: Mutex<Vec<CatalogEntity>>,
    entities: Mutex<Vec<EntityDetail>>,
    failing: Mutex<HashSet<String>>,
    panicking: Mutex<HashSet<String>>,
    gates: Mutex<HashMap<String, Arc<Semaphore>>>,
    catalog_calls: AtomicUsize,
    entity_calls: AtomicUsize,
    requested: Mutex<Vec<EntityKey>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(self, items: Vec<CatalogEntity>) -> Self {
        *self.catalog.lock() = items;
        self
    }

    pub fn with_entity(self, detail: EntityDetail) -> Self {
        self.entities.lock().push(detail);
        self
    }

    /// Requests for `label` fail with a status error.
    pub fn fail(&self, label: &str) {
        self.failing.lock().insert(label.to_string());
    }

    pub fn heal(&self, label: &str) {
        self.failing.lock().remove(label);
    }

    /// Requests for `label` panic inside the source.
    pub fn panic_on(&self, label: &str) {
        self.panicking.lock().insert(label.to_string());
    }

    /// Make requests for `label` wait for [`ScriptedSource::release`].
    pub fn hold(&self, label: &str) {
        self.gates
            .lock()
            .insert(label.to_string(), Arc::new(Semaphore::new(0)));
    }

    /// Let one waiting (or future) request for `label` through.
    pub fn release(&self, label: &str) {
        if let Some(gate) = self.gates.lock().get(label) {
            gate.add_permits(1);
        }
    }

    pub fn catalog_calls(&self) -> usize {
        self.catalog_calls.load(Ordering::SeqCst)
    }

    pub fn entity_calls(&self) -> usize {
        self.entity_calls.load(Ordering::SeqCst)
    }

    pub fn requested_keys(&self) -> Vec<EntityKey> {
        self.requested.lock().clone()
    }

    async fn pass_gate(&self, label: &str) {
        let gate = self.gates.lock().get(label).cloned();
        if let Some(gate) = gate {
            gate.acquire()
                .await
                .expect("gate semaphore closed")
                .forget();
        }
    }

    fn outcome_for(&self, label: &str) -> Result<(), QueryError> {
        if self.panicking.lock().contains(label) {
            panic!("scripted panic for {}", label);
        }
        if self.failing.lock().contains(label) {
            return Err(QueryError::Status {
                status: 503,
                body: format!("scripted failure for {}", label),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogSource for ScriptedSource {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn list_catalog(&self) -> Result<Vec<CatalogEntity>, QueryError> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        self.pass_gate(CATALOG_GATE).await;
        // Let concurrent callers pile up before answering.
        tokio::time::sleep(Duration::from_millis(5)).await;
        self.outcome_for(CATALOG_GATE)?;
        Ok(self.catalog.lock().clone())
    }

    async fn get_entity(&self, key: &EntityKey) -> Result<Option<EntityDetail>, QueryError> {
        if key.is_none() {
            return Err(QueryError::MissingKey);
        }
        self.entity_calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().push(key.clone());

        let label = key.to_string();
        self.pass_gate(&label).await;
        tokio::time::sleep(Duration::from_millis(5)).await;
        self.outcome_for(&label)?;

        let found = self
            .entities
            .lock()
            .iter()
            .find(|detail| answers(detail, key))
            .cloned();
        Ok(found)
    }
}

/// Whether `detail` is what a lookup for `key` should return.
///
/// Names go out lower-cased, so they compare ignoring case.
fn answers(detail: &EntityDetail, key: &EntityKey) -> bool {
    match key {
        EntityKey::ById(id) => detail.id() == id,
        EntityKey::ByName(name) => detail.name().eq_ignore_ascii_case(name),
        EntityKey::None => false,
    }
}
