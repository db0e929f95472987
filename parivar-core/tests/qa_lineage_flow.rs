//! QA tests for the lineage engine through the public API.
//!
//! These tests verify the end-to-end flows a family session exercises:
//! - Root resolution and generation traversal over a real household
//! - Anchoring the viewer through the relation label
//! - Growing the tree (spouse and child additions)
//! - Deleting members in both modes without dangling references
//!
//! Run with: `cargo test -p parivar-core --test qa_lineage_flow`

use parivar_core::testing::sample_family;
use parivar_core::{DeleteMode, Gender, GenerationNode, LineageError, MemberDraft};

// =============================================================================
// TRAVERSAL OVER THE SAMPLE HOUSEHOLD
// =============================================================================

#[test]
fn test_household_renders_three_generations() {
    let (family, ids) = sample_family();
    let lineage = family.lineage();

    assert_eq!(lineage.roots(), vec![ids.grandfather]);

    let nodes: Vec<GenerationNode> = lineage.traverse().collect();
    assert_eq!(nodes.len(), 4);

    // Grandparents root the tree.
    assert_eq!(nodes[0].depth, 0);
    assert_eq!(nodes[0].couple.left, ids.grandfather);
    assert_eq!(nodes[0].couple.right, Some(ids.grandmother));
    assert_eq!(nodes[0].couple.children, vec![ids.father]);

    // Parents, with the mother resolved as an in-law spouse.
    assert_eq!(nodes[1].depth, 1);
    assert_eq!(nodes[1].couple.left, ids.father);
    assert_eq!(nodes[1].couple.right, Some(ids.mother));
    assert_eq!(nodes[1].couple.children, vec![ids.self_member, ids.sister]);

    // The youngest generation, unmarried and childless.
    assert_eq!(nodes[2].depth, 2);
    assert_eq!(nodes[2].couple.left, ids.self_member);
    assert_eq!(nodes[3].depth, 2);
    assert_eq!(nodes[3].couple.left, ids.sister);
}

#[test]
fn test_couple_node_agrees_from_either_spouse() {
    let (family, ids) = sample_family();
    let lineage = family.lineage();

    let from_father = lineage.couple_node(ids.father).unwrap();
    let from_mother = lineage.couple_node(ids.mother).unwrap();
    assert_eq!(from_father, from_mother);
    assert_eq!(from_father.left, ids.father);
}

#[test]
fn test_self_anchor_is_findable() {
    let (family, ids) = sample_family();
    let anchor = family.lineage().find_by_relation("SELF").unwrap();
    assert_eq!(anchor.id, ids.self_member);
    assert_eq!(anchor.name, "Rajesh Patil");
}

#[test]
fn test_remembrance_view_lists_deceased_with_tithi() {
    let (family, ids) = sample_family();
    let deceased = family.lineage().deceased_members();

    assert_eq!(deceased.len(), 2);
    let grandfather = deceased.iter().find(|m| m.id == ids.grandfather).unwrap();
    let tithi = grandfather.punya_tithi.as_ref().unwrap();
    assert_eq!(tithi.to_string(), "Kartik Ashtami, Krishna Paksha");
}

// =============================================================================
// GROWING THE TREE
// =============================================================================

#[test]
fn test_marriage_and_next_generation() {
    let (mut family, ids) = sample_family();
    let lineage = family.lineage_mut();

    let wife = lineage
        .add_spouse(
            ids.self_member,
            MemberDraft::new("Priya Patil", Gender::Female).with_relation("Wife"),
        )
        .unwrap();
    let son = lineage
        .add_child(ids.self_member, MemberDraft::new("Aarav Patil", Gender::Male))
        .unwrap();

    // The wife joins Self's couple node rather than rooting her own tree.
    assert_eq!(lineage.roots(), vec![ids.grandfather]);
    let node = lineage.couple_node(wife).unwrap();
    assert_eq!(node.left, ids.self_member);
    assert_eq!(node.right, Some(wife));
    assert_eq!(node.children, vec![son]);

    // Depth-first: the new grandson is visited before the sister.
    let nodes: Vec<GenerationNode> = lineage.traverse().collect();
    assert_eq!(nodes.len(), 5);
    assert_eq!(nodes[3].couple.left, son);
    assert_eq!(nodes[3].depth, 3);
    assert_eq!(nodes[4].couple.left, ids.sister);
}

#[test]
fn test_second_marriage_is_rejected() {
    let (mut family, ids) = sample_family();
    let err = family
        .lineage_mut()
        .add_spouse(ids.father, MemberDraft::new("Anita", Gender::Female))
        .unwrap_err();

    assert!(matches!(
        err,
        LineageError::SpouseConflict { member, spouse }
            if member == ids.father && spouse == ids.mother
    ));
}

// =============================================================================
// DELETION MODES
// =============================================================================

#[test]
fn test_cascade_delete_prunes_the_branch() {
    let (mut family, ids) = sample_family();
    let lineage = family.lineage_mut();

    lineage
        .delete_member(ids.father, DeleteMode::CascadeDescendants)
        .unwrap();

    assert!(lineage.get(ids.father).is_none());
    assert!(lineage.get(ids.self_member).is_none());
    assert!(lineage.get(ids.sister).is_none());

    // The widowed mother keeps her record but loses the spouse link,
    // which makes her a root of her own.
    let mother = lineage.get(ids.mother).unwrap();
    assert_eq!(mother.spouse_id, None);
    assert_eq!(lineage.roots(), vec![ids.grandfather, ids.mother]);
}

#[test]
fn test_preserve_delete_promotes_children() {
    let (mut family, ids) = sample_family();
    let lineage = family.lineage_mut();

    lineage
        .delete_member(ids.father, DeleteMode::PreserveDescendants)
        .unwrap();

    // Children keep their records and surface as new roots.
    let roots = lineage.roots();
    assert!(roots.contains(&ids.self_member));
    assert!(roots.contains(&ids.sister));
    assert!(roots.contains(&ids.mother));
    assert_eq!(lineage.get(ids.self_member).unwrap().parent_id, None);

    // No surviving member references the removed id.
    for member in lineage.members() {
        assert_ne!(member.parent_id, Some(ids.father));
        assert_ne!(member.spouse_id, Some(ids.father));
    }
}
