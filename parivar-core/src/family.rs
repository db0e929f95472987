//! The family aggregate: identity details, lineage and traditions.
//!
//! One `Family` instance exists per family session; it is constructed
//! when the session opens and dropped when it ends, never shared as
//! ambient state. All lineage mutations flow through
//! [`Family::lineage_mut`], which hands out the store's own guarded API.

use crate::lineage::Lineage;
use crate::tradition::Tradition;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FamilyId(Uuid);

impl FamilyId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FamilyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A family's record vault.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Family {
    pub id: FamilyId,
    pub name: String,
    /// Ancestral clan name.
    pub gotra: Option<String>,
    /// Family deity.
    pub kuladevata: Option<String>,
    /// Family goddess.
    pub kuldevi: Option<String>,
    /// Ancestral place of origin.
    pub origin: Option<String>,
    lineage: Lineage,
    traditions: Vec<Tradition>,
}

impl Family {
    /// Create a new family with an empty lineage.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FamilyId::new(),
            name: name.into(),
            gotra: None,
            kuladevata: None,
            kuldevi: None,
            origin: None,
            lineage: Lineage::new(),
            traditions: Vec::new(),
        }
    }

    /// Set the gotra.
    pub fn with_gotra(mut self, gotra: impl Into<String>) -> Self {
        self.gotra = Some(gotra.into());
        self
    }

    /// Set the kuladevata.
    pub fn with_kuladevata(mut self, kuladevata: impl Into<String>) -> Self {
        self.kuladevata = Some(kuladevata.into());
        self
    }

    /// Set the kuldevi.
    pub fn with_kuldevi(mut self, kuldevi: impl Into<String>) -> Self {
        self.kuldevi = Some(kuldevi.into());
        self
    }

    /// Set the place of origin.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Read access to the lineage.
    pub fn lineage(&self) -> &Lineage {
        &self.lineage
    }

    /// Mutable access to the lineage; all writes go through the store's
    /// validated operations.
    pub fn lineage_mut(&mut self) -> &mut Lineage {
        &mut self.lineage
    }

    /// Recorded traditions, in the order they were added.
    pub fn traditions(&self) -> &[Tradition] {
        &self.traditions
    }

    /// Record a tradition.
    pub fn add_tradition(&mut self, tradition: Tradition) {
        self.traditions.push(tradition);
    }

    /// Apply a partial identity update.
    pub fn update_details(&mut self, details: FamilyDetails) {
        if let Some(name) = details.name {
            self.name = name;
        }
        if let Some(gotra) = details.gotra {
            self.gotra = Some(gotra);
        }
        if let Some(kuladevata) = details.kuladevata {
            self.kuladevata = Some(kuladevata);
        }
        if let Some(kuldevi) = details.kuldevi {
            self.kuldevi = Some(kuldevi);
        }
        if let Some(origin) = details.origin {
            self.origin = Some(origin);
        }
    }
}

/// Partial update for a family's identity details.
#[derive(Debug, Clone, Default)]
pub struct FamilyDetails {
    pub name: Option<String>,
    pub gotra: Option<String>,
    pub kuladevata: Option<String>,
    pub kuldevi: Option<String>,
    pub origin: Option<String>,
}

impl FamilyDetails {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the family name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Change the gotra.
    pub fn with_gotra(mut self, gotra: impl Into<String>) -> Self {
        self.gotra = Some(gotra.into());
        self
    }

    /// Change the kuladevata.
    pub fn with_kuladevata(mut self, kuladevata: impl Into<String>) -> Self {
        self.kuladevata = Some(kuladevata.into());
        self
    }

    /// Change the kuldevi.
    pub fn with_kuldevi(mut self, kuldevi: impl Into<String>) -> Self {
        self.kuldevi = Some(kuldevi.into());
        self
    }

    /// Change the place of origin.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}
