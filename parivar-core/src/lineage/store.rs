//! The lineage store and its mutation engine.
//!
//! `Lineage` owns the flat member collection and is the sole writer to
//! it. Every operation validates fully against the current snapshot
//! before touching it, so a failed call leaves the store unchanged.
//! Reads (index, roots, traversal) are derived on demand in `tree`.

use super::member::{Member, MemberDraft, MemberId, MemberUpdate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors from lineage mutations.
#[derive(Debug, Error)]
pub enum LineageError {
    /// Validation: a member name may not be empty.
    #[error("member name cannot be empty")]
    EmptyName,

    /// Validation: an add operation referenced an id that is not in the
    /// lineage.
    #[error("cannot link to unknown member {0}")]
    UnknownAnchor(MemberId),

    /// The operation targeted a member that is not in the lineage.
    #[error("member not found: {0}")]
    NotFound(MemberId),

    /// Creating the spouse link would displace an existing one.
    #[error("member {member} already has spouse {spouse}")]
    SpouseConflict { member: MemberId, spouse: MemberId },
}

/// How `delete_member` treats the target's descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeleteMode {
    /// Remove the target and every member reachable through child edges.
    CascadeDescendants,
    /// Remove only the target; its children stay and become root
    /// candidates.
    PreserveDescendants,
}

/// The flat collection of family members.
///
/// Insertion order is preserved; roots, children and traversal all
/// inherit it, which keeps rendering deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lineage {
    members: Vec<Member>,
}

impl Lineage {
    /// Create a new empty lineage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a member by id.
    pub fn get(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// All members in insertion order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check whether the lineage is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Check whether a member id is present.
    pub fn contains(&self, id: MemberId) -> bool {
        self.members.iter().any(|m| m.id == id)
    }

    /// Members flagged deceased, for the remembrance view.
    pub fn deceased_members(&self) -> Vec<&Member> {
        self.members.iter().filter(|m| m.is_deceased).collect()
    }

    /// First member whose relation label matches, case-insensitive.
    ///
    /// The presentation layer passes `"self"` to locate the viewer's own
    /// entry in the tree.
    pub fn find_by_relation(&self, query: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.matches_relation(query))
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add an unlinked member, a new root candidate.
    ///
    /// Used for founding ancestors that have no recorded parent or
    /// spouse in the vault.
    pub fn add_ancestor(&mut self, draft: MemberDraft) -> Result<MemberId, LineageError> {
        validate_name(&draft.name)?;
        let member = Member::from_draft(draft, "Ancestor");
        let id = member.id;
        self.members.push(member);
        Ok(id)
    }

    /// Add a child of an existing member.
    pub fn add_child(
        &mut self,
        parent_id: MemberId,
        draft: MemberDraft,
    ) -> Result<MemberId, LineageError> {
        validate_name(&draft.name)?;
        if !self.contains(parent_id) {
            return Err(LineageError::UnknownAnchor(parent_id));
        }

        let mut member = Member::from_draft(draft, "Child");
        member.parent_id = Some(parent_id);
        let id = member.id;
        self.members.push(member);
        Ok(id)
    }

    /// Add a spouse of an existing member, linking both directions.
    ///
    /// Rejects with [`LineageError::SpouseConflict`] if the existing
    /// member is already married; the old link is never silently
    /// overwritten.
    pub fn add_spouse(
        &mut self,
        member_id: MemberId,
        draft: MemberDraft,
    ) -> Result<MemberId, LineageError> {
        validate_name(&draft.name)?;
        let anchor = self
            .get(member_id)
            .ok_or(LineageError::UnknownAnchor(member_id))?;
        if let Some(existing) = anchor.spouse_id {
            return Err(LineageError::SpouseConflict {
                member: member_id,
                spouse: existing,
            });
        }

        let mut member = Member::from_draft(draft, "Spouse");
        member.spouse_id = Some(member_id);
        let id = member.id;
        self.members.push(member);

        if let Some(anchor) = self.get_mut(member_id) {
            anchor.spouse_id = Some(id);
        }
        Ok(id)
    }

    /// Apply a partial update to a member's display fields.
    ///
    /// Parent and spouse links are not editable here; link topology
    /// changes only through the add and delete operations.
    pub fn update_member(
        &mut self,
        id: MemberId,
        update: MemberUpdate,
    ) -> Result<(), LineageError> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        let member = self.get_mut(id).ok_or(LineageError::NotFound(id))?;

        if let Some(name) = update.name {
            member.name = name;
        }
        if let Some(gender) = update.gender {
            member.gender = gender;
        }
        if let Some(relation) = update.relation {
            member.relation = relation;
        }
        if let Some(is_deceased) = update.is_deceased {
            member.is_deceased = is_deceased;
        }
        Ok(())
    }

    /// Remove a member, then clear every surviving `parent_id` or
    /// `spouse_id` that pointed at a removed id.
    pub fn delete_member(&mut self, id: MemberId, mode: DeleteMode) -> Result<(), LineageError> {
        if !self.contains(id) {
            return Err(LineageError::NotFound(id));
        }

        let removed = match mode {
            DeleteMode::CascadeDescendants => self.descendants_of(id),
            DeleteMode::PreserveDescendants => HashSet::from([id]),
        };

        self.members.retain(|m| !removed.contains(&m.id));
        for member in &mut self.members {
            if member.parent_id.is_some_and(|p| removed.contains(&p)) {
                member.parent_id = None;
            }
            if member.spouse_id.is_some_and(|s| removed.contains(&s)) {
                member.spouse_id = None;
            }
        }
        Ok(())
    }

    fn get_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.id == id)
    }

    /// The target plus every member whose `parent_id` chain reaches it.
    fn descendants_of(&self, id: MemberId) -> HashSet<MemberId> {
        let mut collected = HashSet::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if !collected.insert(next) {
                continue;
            }
            for member in &self.members {
                if member.parent_id == Some(next) {
                    stack.push(member.id);
                }
            }
        }
        collected
    }
}

fn validate_name(name: &str) -> Result<(), LineageError> {
    if name.trim().is_empty() {
        return Err(LineageError::EmptyName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineage::Gender;

    fn draft(name: &str, gender: Gender) -> MemberDraft {
        MemberDraft::new(name, gender)
    }

    #[test]
    fn test_empty_lineage() {
        let lineage = Lineage::new();
        assert!(lineage.is_empty());
        assert_eq!(lineage.len(), 0);
    }

    #[test]
    fn test_add_ancestor() {
        let mut lineage = Lineage::new();
        let id = lineage
            .add_ancestor(draft("Ganpatrao", Gender::Male).with_relation("Grandfather"))
            .unwrap();

        let member = lineage.get(id).unwrap();
        assert_eq!(member.relation, "Grandfather");
        assert!(member.parent_id.is_none());
        assert!(member.spouse_id.is_none());
    }

    #[test]
    fn test_add_child_links_parent() {
        let mut lineage = Lineage::new();
        let father = lineage.add_ancestor(draft("Suresh", Gender::Male)).unwrap();
        let child = lineage
            .add_child(father, draft("Rajesh", Gender::Male))
            .unwrap();

        assert_eq!(lineage.get(child).unwrap().parent_id, Some(father));
        assert_eq!(lineage.get(child).unwrap().relation, "Child");
    }

    #[test]
    fn test_add_child_rejects_unknown_parent() {
        let mut lineage = Lineage::new();
        let ghost = MemberId::new();
        let err = lineage
            .add_child(ghost, draft("Rajesh", Gender::Male))
            .unwrap_err();
        assert!(matches!(err, LineageError::UnknownAnchor(id) if id == ghost));
        assert!(lineage.is_empty());
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut lineage = Lineage::new();
        let err = lineage.add_ancestor(draft("   ", Gender::Male)).unwrap_err();
        assert!(matches!(err, LineageError::EmptyName));
        assert!(lineage.is_empty());
    }

    #[test]
    fn test_add_spouse_links_both_directions() {
        let mut lineage = Lineage::new();
        let husband = lineage
            .add_ancestor(draft("Ganpatrao", Gender::Male))
            .unwrap();
        let wife = lineage
            .add_spouse(husband, draft("Savitribai", Gender::Female))
            .unwrap();

        assert_eq!(lineage.get(wife).unwrap().spouse_id, Some(husband));
        assert_eq!(lineage.get(husband).unwrap().spouse_id, Some(wife));
        assert_eq!(lineage.get(wife).unwrap().relation, "Spouse");
    }

    #[test]
    fn test_add_spouse_rejects_second_marriage() {
        let mut lineage = Lineage::new();
        let husband = lineage
            .add_ancestor(draft("Ganpatrao", Gender::Male))
            .unwrap();
        let wife = lineage
            .add_spouse(husband, draft("Savitribai", Gender::Female))
            .unwrap();

        let err = lineage
            .add_spouse(husband, draft("Another", Gender::Female))
            .unwrap_err();
        assert!(matches!(
            err,
            LineageError::SpouseConflict { member, spouse }
                if member == husband && spouse == wife
        ));
        // The failed call left the store unchanged.
        assert_eq!(lineage.len(), 2);
        assert_eq!(lineage.get(husband).unwrap().spouse_id, Some(wife));
    }

    #[test]
    fn test_update_member_display_fields() {
        let mut lineage = Lineage::new();
        let id = lineage.add_ancestor(draft("Suresh", Gender::Male)).unwrap();

        lineage
            .update_member(
                id,
                MemberUpdate::new()
                    .with_name("Suresh Patil")
                    .with_relation("Father")
                    .with_deceased(true),
            )
            .unwrap();

        let member = lineage.get(id).unwrap();
        assert_eq!(member.name, "Suresh Patil");
        assert_eq!(member.relation, "Father");
        assert!(member.is_deceased);
    }

    #[test]
    fn test_update_rejects_unknown_member() {
        let mut lineage = Lineage::new();
        let ghost = MemberId::new();
        let err = lineage
            .update_member(ghost, MemberUpdate::new().with_name("X"))
            .unwrap_err();
        assert!(matches!(err, LineageError::NotFound(id) if id == ghost));
    }

    #[test]
    fn test_update_rejects_empty_name() {
        let mut lineage = Lineage::new();
        let id = lineage.add_ancestor(draft("Suresh", Gender::Male)).unwrap();
        let err = lineage
            .update_member(id, MemberUpdate::new().with_name(""))
            .unwrap_err();
        assert!(matches!(err, LineageError::EmptyName));
        assert_eq!(lineage.get(id).unwrap().name, "Suresh");
    }

    #[test]
    fn test_delete_preserve_clears_references() {
        let mut lineage = Lineage::new();
        let m1 = lineage.add_ancestor(draft("Ganpatrao", Gender::Male)).unwrap();
        let m2 = lineage
            .add_spouse(m1, draft("Savitribai", Gender::Female))
            .unwrap();
        let m3 = lineage.add_child(m1, draft("Suresh", Gender::Male)).unwrap();

        lineage
            .delete_member(m1, DeleteMode::PreserveDescendants)
            .unwrap();

        assert!(lineage.get(m1).is_none());
        assert_eq!(lineage.get(m2).unwrap().spouse_id, None);
        assert_eq!(lineage.get(m3).unwrap().parent_id, None);
    }

    #[test]
    fn test_delete_cascade_removes_descendants() {
        let mut lineage = Lineage::new();
        let m1 = lineage.add_ancestor(draft("Ganpatrao", Gender::Male)).unwrap();
        let m3 = lineage.add_child(m1, draft("Suresh", Gender::Male)).unwrap();
        let m4 = lineage.add_child(m3, draft("Rajesh", Gender::Male)).unwrap();
        let unrelated = lineage
            .add_ancestor(draft("Vishwanath", Gender::Male))
            .unwrap();

        lineage
            .delete_member(m1, DeleteMode::CascadeDescendants)
            .unwrap();

        assert!(lineage.get(m1).is_none());
        assert!(lineage.get(m3).is_none());
        assert!(lineage.get(m4).is_none());
        assert!(lineage.get(unrelated).is_some());
    }

    #[test]
    fn test_delete_cascade_leaves_no_dangling_references() {
        let mut lineage = Lineage::new();
        let m1 = lineage.add_ancestor(draft("Ganpatrao", Gender::Male)).unwrap();
        let m3 = lineage.add_child(m1, draft("Suresh", Gender::Male)).unwrap();
        // The son's wife survives the cascade; her spouse link must not.
        let wife = lineage
            .add_spouse(m3, draft("Meena", Gender::Female))
            .unwrap();

        lineage
            .delete_member(m1, DeleteMode::CascadeDescendants)
            .unwrap();

        let widow = lineage.get(wife).unwrap();
        assert_eq!(widow.spouse_id, None);
        for member in lineage.members() {
            if let Some(parent) = member.parent_id {
                assert!(lineage.contains(parent));
            }
            if let Some(spouse) = member.spouse_id {
                assert!(lineage.contains(spouse));
            }
        }
    }

    #[test]
    fn test_delete_rejects_unknown_member() {
        let mut lineage = Lineage::new();
        let ghost = MemberId::new();
        let err = lineage
            .delete_member(ghost, DeleteMode::PreserveDescendants)
            .unwrap_err();
        assert!(matches!(err, LineageError::NotFound(id) if id == ghost));
    }

    #[test]
    fn test_deceased_members_view() {
        let mut lineage = Lineage::new();
        lineage
            .add_ancestor(draft("Ganpatrao", Gender::Male).deceased())
            .unwrap();
        lineage.add_ancestor(draft("Suresh", Gender::Male)).unwrap();

        let deceased = lineage.deceased_members();
        assert_eq!(deceased.len(), 1);
        assert_eq!(deceased[0].name, "Ganpatrao");
    }

    #[test]
    fn test_find_by_relation() {
        let mut lineage = Lineage::new();
        lineage
            .add_ancestor(draft("Rajesh", Gender::Male).with_relation("Self"))
            .unwrap();

        assert!(lineage.find_by_relation("self").is_some());
        assert!(lineage.find_by_relation("SELF").is_some());
        assert!(lineage.find_by_relation("cousin").is_none());
    }
}
