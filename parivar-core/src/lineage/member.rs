//! Member records and their identifiers.

use crate::panchang::PanchangTithi;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a family member.
///
/// Assigned at creation, immutable, never reused. Ids are ordered so
/// root-couple tie-breaking has a deterministic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(Uuid);

impl MemberId {
    /// Create a new unique member ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender of a family member, used only for display pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    /// No fixed display-pairing side.
    Other,
}

impl Gender {
    /// Get the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// A single entry in the family lineage.
///
/// Members reference each other only through weak id links; the
/// `Lineage` store owns every record and is the sole writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier.
    pub id: MemberId,
    /// Full name, never empty.
    pub name: String,
    /// Free-text relation label shown on the tree ("Father", "Self", ...).
    pub relation: String,
    pub gender: Gender,
    /// Recorded parent edge. At most one; the other parent is inferred
    /// through the recorded parent's spouse.
    pub parent_id: Option<MemberId>,
    /// Symmetric marriage edge, kept consistent by the mutation engine.
    pub spouse_id: Option<MemberId>,
    pub is_deceased: bool,
    /// Remembrance date in the lunar calendar, for deceased members.
    pub punya_tithi: Option<PanchangTithi>,
    /// ISO `YYYY-MM-DD`.
    pub birth_date: Option<String>,
    /// ISO `YYYY-MM-DD`.
    pub death_date: Option<String>,
    pub photo_url: Option<String>,
}

impl Member {
    /// Materialize a draft into a fresh, unlinked member.
    ///
    /// `fallback_relation` fills the relation label when the draft
    /// leaves it empty (the add operation supplies its own placeholder).
    pub(crate) fn from_draft(draft: MemberDraft, fallback_relation: &str) -> Self {
        Self {
            id: MemberId::new(),
            name: draft.name,
            relation: draft
                .relation
                .unwrap_or_else(|| fallback_relation.to_string()),
            gender: draft.gender,
            parent_id: None,
            spouse_id: None,
            is_deceased: draft.is_deceased,
            punya_tithi: draft.punya_tithi,
            birth_date: draft.birth_date,
            death_date: draft.death_date,
            photo_url: draft.photo_url,
        }
    }

    /// Check whether this member's relation label matches (case-insensitive).
    ///
    /// The presentation layer uses `"self"` to anchor the viewer's own
    /// position in the tree.
    pub fn matches_relation(&self, query: &str) -> bool {
        self.relation.to_lowercase() == query.to_lowercase()
    }
}

/// Input for the add operations.
///
/// Name and gender are required; everything else is optional and set
/// with the builder methods.
#[derive(Debug, Clone)]
pub struct MemberDraft {
    pub name: String,
    pub gender: Gender,
    /// Relation label; falls back to a placeholder derived from the add
    /// operation when absent.
    pub relation: Option<String>,
    pub is_deceased: bool,
    pub punya_tithi: Option<PanchangTithi>,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    pub photo_url: Option<String>,
}

impl MemberDraft {
    /// Create a new draft with the required fields.
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
            relation: None,
            is_deceased: false,
            punya_tithi: None,
            birth_date: None,
            death_date: None,
            photo_url: None,
        }
    }

    /// Set the relation label.
    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = Some(relation.into());
        self
    }

    /// Mark the member as deceased.
    pub fn deceased(mut self) -> Self {
        self.is_deceased = true;
        self
    }

    /// Set the remembrance tithi.
    pub fn with_punya_tithi(mut self, tithi: PanchangTithi) -> Self {
        self.punya_tithi = Some(tithi);
        self
    }

    /// Set the birth date (ISO `YYYY-MM-DD`).
    pub fn with_birth_date(mut self, date: impl Into<String>) -> Self {
        self.birth_date = Some(date.into());
        self
    }

    /// Set the death date (ISO `YYYY-MM-DD`).
    pub fn with_death_date(mut self, date: impl Into<String>) -> Self {
        self.death_date = Some(date.into());
        self
    }

    /// Set the photo URL.
    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }
}

/// Partial update for `update_member`.
///
/// Only display fields are editable here; parent and spouse links change
/// exclusively through the add and delete operations.
#[derive(Debug, Clone, Default)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub relation: Option<String>,
    pub is_deceased: Option<bool>,
}

impl MemberUpdate {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Change the gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Change the relation label.
    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = Some(relation.into());
        self
    }

    /// Change the deceased flag.
    pub fn with_deceased(mut self, is_deceased: bool) -> Self {
        self.is_deceased = Some(is_deceased);
        self
    }
}
