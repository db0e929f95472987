//! Test fixtures for the family vault.
//!
//! Provides a deterministic sample household built through the real
//! mutation operations, so unit and integration tests can address
//! specific members by id instead of re-deriving them from names.

use crate::family::Family;
use crate::lineage::{Gender, MemberDraft, MemberId};
use crate::panchang::{Paksha, PanchangTithi};
use crate::tradition::{Category, Step, Tradition};

/// Ids of the members in the sample household.
#[derive(Debug, Clone, Copy)]
pub struct SampleIds {
    pub grandfather: MemberId,
    pub grandmother: MemberId,
    pub father: MemberId,
    pub mother: MemberId,
    pub self_member: MemberId,
    pub sister: MemberId,
}

/// Build the three-generation Patil sample household.
///
/// Deceased grandparents root the tree, the father descends from the
/// grandfather, the mother is an in-law, and "Self" and a sister form
/// the youngest generation. One tradition is pre-recorded.
pub fn sample_family() -> (Family, SampleIds) {
    let mut family = Family::new("Patil Parivar")
        .with_gotra("Kashyap")
        .with_kuladevata("Khandoba (Jejuri)")
        .with_kuldevi("Ekvira Devi")
        .with_origin("Satara, Maharashtra");

    let lineage = family.lineage_mut();

    let grandfather = lineage
        .add_ancestor(
            MemberDraft::new("Late Ganpatrao Patil", Gender::Male)
                .with_relation("Grandfather")
                .deceased()
                .with_punya_tithi(PanchangTithi::new("Kartik", Paksha::Krishna, "Ashtami")),
        )
        .expect("fixture member is valid");

    let grandmother = lineage
        .add_spouse(
            grandfather,
            MemberDraft::new("Late Savitribai Patil", Gender::Female)
                .with_relation("Grandmother")
                .deceased(),
        )
        .expect("fixture member is valid");

    let father = lineage
        .add_child(
            grandfather,
            MemberDraft::new("Suresh Patil", Gender::Male).with_relation("Father"),
        )
        .expect("fixture member is valid");

    let mother = lineage
        .add_spouse(
            father,
            MemberDraft::new("Meena Patil", Gender::Female).with_relation("Mother"),
        )
        .expect("fixture member is valid");

    let self_member = lineage
        .add_child(
            father,
            MemberDraft::new("Rajesh Patil", Gender::Male).with_relation("Self"),
        )
        .expect("fixture member is valid");

    let sister = lineage
        .add_child(
            father,
            MemberDraft::new("Sunita Deshmukh", Gender::Female).with_relation("Sister"),
        )
        .expect("fixture member is valid");

    family.add_tradition(
        Tradition::new("Gudhi Padwa Puja", Category::Festival)
            .with_description(
                "Our traditional way of raising the Gudhi and performing the morning Arati.",
            )
            .with_step(Step::new(
                "Raising the Gudhi",
                "Tie the silk cloth, neem leaves, and gaathi to the bamboo.",
            ))
            .with_step(Step::new(
                "Naivedya",
                "Offer Puran Poli and Shrikhand to the Gudhi.",
            ))
            .with_linked_festival("gudhipadwa"),
    );

    let ids = SampleIds {
        grandfather,
        grandmother,
        father,
        mother,
        self_member,
        sister,
    };
    (family, ids)
}
