// src/storage/mod.rs
// DOCUMENTATION: Storage collaborator abstraction
// PURPOSE: Typed get/all/save/delete/count over the entity tables

pub mod file_store;

pub use file_store::FileStore;

use crate::models::{Amenity, City, Place, Review, State, User};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

/// Failures of the persistence backend
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Full entity state held by a store
/// One id-keyed table per entity type; this is also the on-disk JSON layout
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Tables {
    #[serde(default)]
    pub states: HashMap<Uuid, State>,
    #[serde(default)]
    pub cities: HashMap<Uuid, City>,
    #[serde(default)]
    pub places: HashMap<Uuid, Place>,
    #[serde(default)]
    pub amenities: HashMap<Uuid, Amenity>,
    #[serde(default)]
    pub users: HashMap<Uuid, User>,
    #[serde(default)]
    pub reviews: HashMap<Uuid, Review>,
}

/// A persisted domain object with a unique id and a home table
pub trait Entity: Clone + Send + Sync + 'static {
    /// Type name used in logs and the /stats payload
    const KIND: &'static str;

    fn id(&self) -> Uuid;

    fn table(tables: &Tables) -> &HashMap<Uuid, Self>;

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Uuid, Self>;
}

impl Entity for State {
    const KIND: &'static str = "State";

    fn id(&self) -> Uuid {
        self.id
    }

    fn table(tables: &Tables) -> &HashMap<Uuid, Self> {
        &tables.states
    }

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Uuid, Self> {
        &mut tables.states
    }
}

impl Entity for City {
    const KIND: &'static str = "City";

    fn id(&self) -> Uuid {
        self.id
    }

    fn table(tables: &Tables) -> &HashMap<Uuid, Self> {
        &tables.cities
    }

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Uuid, Self> {
        &mut tables.cities
    }
}

impl Entity for Place {
    const KIND: &'static str = "Place";

    fn id(&self) -> Uuid {
        self.id
    }

    fn table(tables: &Tables) -> &HashMap<Uuid, Self> {
        &tables.places
    }

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Uuid, Self> {
        &mut tables.places
    }
}

impl Entity for Amenity {
    const KIND: &'static str = "Amenity";

    fn id(&self) -> Uuid {
        self.id
    }

    fn table(tables: &Tables) -> &HashMap<Uuid, Self> {
        &tables.amenities
    }

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Uuid, Self> {
        &mut tables.amenities
    }
}

impl Entity for User {
    const KIND: &'static str = "User";

    fn id(&self) -> Uuid {
        self.id
    }

    fn table(tables: &Tables) -> &HashMap<Uuid, Self> {
        &tables.users
    }

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Uuid, Self> {
        &mut tables.users
    }
}

impl Entity for Review {
    const KIND: &'static str = "Review";

    fn id(&self) -> Uuid {
        self.id
    }

    fn table(tables: &Tables) -> &HashMap<Uuid, Self> {
        &tables.reviews
    }

    fn table_mut(tables: &mut Tables) -> &mut HashMap<Uuid, Self> {
        &mut tables.reviews
    }
}

/// Storage collaborator interface
/// Passed explicitly into services and handlers so tests can inject an
/// ephemeral in-memory store; entities are created and destroyed only
/// through this interface
#[allow(async_fn_in_trait)]
pub trait Storage: Send + Sync + 'static {
    /// Fetch one entity by id
    async fn get<E: Entity>(&self, id: Uuid) -> Option<E>;

    /// Fetch every entity of one type, in storage iteration order
    async fn all<E: Entity>(&self) -> Vec<E>;

    /// Insert or replace an entity, keyed by its id
    async fn save<E: Entity>(&self, entity: E) -> Result<(), StorageError>;

    /// Remove an entity; Ok(false) when the id was absent
    async fn delete<E: Entity>(&self, id: Uuid) -> Result<bool, StorageError>;

    /// Number of stored entities of one type
    async fn count<E: Entity>(&self) -> usize;
}
