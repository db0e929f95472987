//! Family tradition records.
//!
//! A tradition is a named ritual with ordered steps, materials and
//! optional festival or tithi links. `RitualGuide` is the structured
//! response contract of the external content-generation collaborator;
//! this crate consumes the shape but never calls a model itself.

use crate::panchang::PanchangTithi;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a tradition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraditionId(Uuid);

impl TraditionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TraditionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TraditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a ritual step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepId(Uuid);

impl StepId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StepId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category of a recorded tradition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Festival,
    Puja,
    Marriage,
    Shraddha,
    Other,
}

impl Category {
    /// Get the display name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Festival => "Festival",
            Category::Puja => "Puja",
            Category::Marriage => "Marriage",
            Category::Shraddha => "Death / Shraddha",
            Category::Other => "Other",
        }
    }

    pub fn all() -> [Category; 5] {
        [
            Category::Festival,
            Category::Puja,
            Category::Marriage,
            Category::Shraddha,
            Category::Other,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Kind of media attached to a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Image,
    Video,
}

/// One step of a ritual.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    pub title: String,
    pub description: String,
    pub media_url: Option<String>,
    pub media_type: Option<MediaType>,
    /// Short Sanskrit mantra with transliteration, if the step has one.
    pub mantra: Option<String>,
}

impl Step {
    /// Create a new step.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: StepId::new(),
            title: title.into(),
            description: description.into(),
            media_url: None,
            media_type: None,
            mantra: None,
        }
    }

    /// Attach a mantra.
    pub fn with_mantra(mut self, mantra: impl Into<String>) -> Self {
        self.mantra = Some(mantra.into());
        self
    }

    /// Attach media.
    pub fn with_media(mut self, url: impl Into<String>, media_type: MediaType) -> Self {
        self.media_url = Some(url.into());
        self.media_type = Some(media_type);
        self
    }
}

/// Structured ritual content produced by the external generation
/// collaborator: setup instructions, a materials list, and sequential
/// steps. Nullable on the collaborator's side; a caller only folds a
/// guide in when generation succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RitualGuide {
    pub setup_instructions: String,
    /// The "Puja Sahitya" materials list.
    pub materials: Vec<String>,
    pub steps: Vec<Step>,
}

/// A family tradition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tradition {
    pub id: TraditionId,
    pub title: String,
    pub category: Category,
    pub description: String,
    pub cover_image: Option<String>,
    pub video_url: Option<String>,
    pub steps: Vec<Step>,
    pub materials: Vec<String>,
    pub setup_instructions: Option<String>,
    /// Link to a bundled festival id, if the tradition belongs to one.
    pub linked_festival_id: Option<String>,
    /// Link to a lunar date, for observances without a bundled festival.
    pub linked_tithi: Option<PanchangTithi>,
    /// Whether the content came from the generation collaborator.
    pub is_ai_generated: bool,
}

impl Tradition {
    /// Create a new tradition.
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        Self {
            id: TraditionId::new(),
            title: title.into(),
            category,
            description: String::new(),
            cover_image: None,
            video_url: None,
            steps: Vec::new(),
            materials: Vec::new(),
            setup_instructions: None,
            linked_festival_id: None,
            linked_tithi: None,
            is_ai_generated: false,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a step.
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Set the materials list.
    pub fn with_materials(mut self, materials: Vec<String>) -> Self {
        self.materials = materials;
        self
    }

    /// Set the setup instructions.
    pub fn with_setup_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.setup_instructions = Some(instructions.into());
        self
    }

    /// Link to a bundled festival.
    pub fn with_linked_festival(mut self, festival_id: impl Into<String>) -> Self {
        self.linked_festival_id = Some(festival_id.into());
        self
    }

    /// Link to a lunar date.
    pub fn with_linked_tithi(mut self, tithi: PanchangTithi) -> Self {
        self.linked_tithi = Some(tithi);
        self
    }

    /// Set the cover image.
    pub fn with_cover_image(mut self, url: impl Into<String>) -> Self {
        self.cover_image = Some(url.into());
        self
    }

    /// Fold an externally generated guide into a new tradition.
    pub fn from_guide(
        title: impl Into<String>,
        category: Category,
        guide: RitualGuide,
    ) -> Self {
        let mut tradition = Self::new(title, category)
            .with_materials(guide.materials)
            .with_setup_instructions(guide.setup_instructions);
        tradition.steps = guide.steps;
        tradition.is_ai_generated = true;
        tradition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panchang::Paksha;

    #[test]
    fn test_manual_tradition() {
        let tradition = Tradition::new("Gudhi Padwa Puja", Category::Festival)
            .with_description("Raising the Gudhi and performing the morning Arati.")
            .with_step(Step::new(
                "Raising the Gudhi",
                "Tie the silk cloth, neem leaves, and gaathi to the bamboo.",
            ))
            .with_step(Step::new(
                "Naivedya",
                "Offer Puran Poli and Shrikhand to the Gudhi.",
            ))
            .with_linked_festival("gudhipadwa");

        assert_eq!(tradition.steps.len(), 2);
        assert!(!tradition.is_ai_generated);
        assert_eq!(tradition.linked_festival_id.as_deref(), Some("gudhipadwa"));
    }

    #[test]
    fn test_from_guide_marks_generated() {
        let guide = RitualGuide {
            setup_instructions: "Clean the puja space and light the lamp.".to_string(),
            materials: vec!["Haldi".to_string(), "Kumkum".to_string()],
            steps: vec![
                Step::new("Sankalpa", "State the intent of the puja.")
                    .with_mantra("Om Ganeshaya Namah"),
            ],
        };

        let tradition = Tradition::from_guide("Satyanarayan Puja", Category::Puja, guide);
        assert!(tradition.is_ai_generated);
        assert_eq!(tradition.materials.len(), 2);
        assert_eq!(tradition.steps.len(), 1);
        assert!(tradition.setup_instructions.is_some());
    }

    #[test]
    fn test_linked_tithi() {
        let tradition = Tradition::new("Punya Smaran", Category::Shraddha)
            .with_linked_tithi(PanchangTithi::new("Kartik", Paksha::Krishna, "Ashtami"));
        assert!(tradition.linked_tithi.is_some());
        assert_eq!(Category::Shraddha.name(), "Death / Shraddha");
    }

    #[test]
    fn test_category_table() {
        assert_eq!(Category::all().len(), 5);
    }
}
