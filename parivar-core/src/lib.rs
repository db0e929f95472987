//! Family lineage vault: a multi-generation genealogical graph engine
//! with a lunar ritual-calendar vocabulary.
//!
//! This crate provides:
//! - A flat, id-linked member store with referentially consistent
//!   add/update/delete operations
//! - Deterministic root resolution and couple pairing for rendering
//! - A lazy generation-by-generation tree traversal
//! - Panchang (lunar calendar) types for remembrance dates and festivals
//! - Family tradition records and versioned JSON archives
//!
//! # Quick Start
//!
//! ```ignore
//! use parivar_core::{Family, Gender, MemberDraft};
//!
//! let mut family = Family::new("Patil Parivar");
//! let lineage = family.lineage_mut();
//!
//! let patriarch = lineage.add_ancestor(
//!     MemberDraft::new("Ganpatrao Patil", Gender::Male).with_relation("Grandfather"),
//! )?;
//! lineage.add_spouse(patriarch, MemberDraft::new("Savitribai Patil", Gender::Female))?;
//! lineage.add_child(patriarch, MemberDraft::new("Suresh Patil", Gender::Male))?;
//!
//! for node in lineage.traverse() {
//!     println!("{:indent$}{:?}", "", node.couple, indent = node.depth * 2);
//! }
//! ```

pub mod family;
pub mod lineage;
pub mod panchang;
pub mod persist;
pub mod testing;
pub mod tradition;

// Primary public API
pub use family::{Family, FamilyDetails, FamilyId};
pub use lineage::{
    CoupleNode, DeleteMode, Gender, GenerationNode, Lineage, LineageError, LineageIndex, Member,
    MemberDraft, MemberId, MemberUpdate, Traversal,
};
pub use panchang::{Paksha, PanchangTithi};
pub use persist::{ArchiveMetadata, FamilyArchive, PersistError};
pub use tradition::{Category, RitualGuide, Step, Tradition, TraditionId};
