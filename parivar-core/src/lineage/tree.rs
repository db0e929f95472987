//! Read-side derivations: graph index, root resolution, couple pairing
//! and generation traversal.
//!
//! Everything here is a pure function of a `Lineage` snapshot and must
//! be rebuilt after any mutation. At household scale the rebuild is
//! cheaper than maintaining an incremental index.

use super::member::{Gender, Member, MemberId};
use super::store::Lineage;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Id-keyed lookup derived from a lineage snapshot.
pub struct LineageIndex<'a> {
    members: &'a [Member],
    by_id: HashMap<MemberId, &'a Member>,
    children: HashMap<MemberId, Vec<MemberId>>,
}

impl<'a> LineageIndex<'a> {
    /// Build an index over the current snapshot.
    pub fn new(lineage: &'a Lineage) -> Self {
        let members = lineage.members();
        let mut by_id = HashMap::with_capacity(members.len());
        let mut children: HashMap<MemberId, Vec<MemberId>> = HashMap::new();

        for member in members {
            by_id.insert(member.id, member);
        }
        for member in members {
            if let Some(parent) = member.parent_id {
                children.entry(parent).or_default().push(member.id);
            }
        }

        Self {
            members,
            by_id,
            children,
        }
    }

    /// Get a member by id.
    pub fn get(&self, id: MemberId) -> Option<&'a Member> {
        self.by_id.get(&id).copied()
    }

    /// Resolve a member's spouse, tolerating a dangling link.
    pub fn spouse_of(&self, member: &Member) -> Option<&'a Member> {
        member.spouse_id.and_then(|id| self.get(id))
    }

    /// Direct children of one member, in insertion order.
    pub fn children_of(&self, id: MemberId) -> &[MemberId] {
        self.children.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Ordered root entry points, exactly one per root family unit.
    ///
    /// A member roots the forest when it has no parent and its spouse
    /// (if any) has none either; married root candidates are
    /// deduplicated so a couple yields a single entry.
    pub fn roots(&self) -> Vec<MemberId> {
        self.members
            .iter()
            .filter(|m| self.is_root(m))
            .map(|m| m.id)
            .collect()
    }

    fn is_root(&self, member: &Member) -> bool {
        if member.parent_id.is_some() {
            return false;
        }
        let Some(spouse) = self.spouse_of(member) else {
            return true;
        };
        // An in-law: the spouse descends from another tree, so this
        // member is rendered there instead of rooting its own.
        if spouse.parent_id.is_some() {
            return false;
        }
        // Root couple: emit the Male side when the pair has exactly one,
        // otherwise the smaller id. Deterministic but arbitrary for
        // same-gender or Other/Other couples.
        match (member.gender, spouse.gender) {
            (Gender::Male, other) if other != Gender::Male => true,
            (own, Gender::Male) if own != Gender::Male => false,
            _ => member.id < spouse.id,
        }
    }

    /// The couple node for any member: the member, its resolved spouse,
    /// and their pooled children.
    ///
    /// When the pair has one Male and one Female, Male takes the left
    /// slot; otherwise the queried member keeps its given position.
    pub fn couple_node(&self, id: MemberId) -> Option<CoupleNode> {
        let member = self.get(id)?;
        let spouse = self.spouse_of(member);

        let (left, right) = match spouse {
            Some(s) if member.gender == Gender::Female && s.gender == Gender::Male => {
                (s, Some(member))
            }
            _ => (member, spouse),
        };

        let mut children: Vec<MemberId> = self.children_of(left.id).to_vec();
        if let Some(right) = right {
            for &child in self.children_of(right.id) {
                if !children.contains(&child) {
                    children.push(child);
                }
            }
        }

        Some(CoupleNode {
            left: left.id,
            right: right.map(|m| m.id),
            children,
        })
    }
}

/// A paired rendering unit: one member, their resolved spouse, and the
/// couple's pooled children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoupleNode {
    pub left: MemberId,
    pub right: Option<MemberId>,
    /// Union of both spouses' children, deduplicated by id.
    pub children: Vec<MemberId>,
}

/// One step of a generation traversal: a couple and its depth below the
/// root that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationNode {
    pub couple: CoupleNode,
    pub depth: usize,
}

/// Lazy depth-first walk over the forest of couple nodes.
///
/// Restartable: call [`Lineage::traverse`] again for a fresh pass over
/// the same snapshot.
pub struct Traversal<'a> {
    index: LineageIndex<'a>,
    stack: Vec<(MemberId, usize)>,
    visited: HashSet<MemberId>,
}

impl<'a> Traversal<'a> {
    fn new(lineage: &'a Lineage) -> Self {
        let index = LineageIndex::new(lineage);
        let mut stack: Vec<(MemberId, usize)> =
            index.roots().into_iter().map(|id| (id, 0)).collect();
        stack.reverse();
        Self {
            index,
            stack,
            visited: HashSet::new(),
        }
    }
}

impl Iterator for Traversal<'_> {
    type Item = GenerationNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, depth)) = self.stack.pop() {
            let Some(couple) = self.index.couple_node(id) else {
                continue;
            };
            // Anomalous stored edges could revisit a couple; skip so the
            // walk stays finite.
            if !self.visited.insert(couple.left) {
                continue;
            }
            if let Some(right) = couple.right {
                self.visited.insert(right);
            }
            for &child in couple.children.iter().rev() {
                self.stack.push((child, depth + 1));
            }
            return Some(GenerationNode { couple, depth });
        }
        None
    }
}

impl Lineage {
    /// Build a fresh read index over the current snapshot.
    pub fn index(&self) -> LineageIndex<'_> {
        LineageIndex::new(self)
    }

    /// Ordered root entry points, one per root family unit.
    pub fn roots(&self) -> Vec<MemberId> {
        self.index().roots()
    }

    /// The couple node for any member.
    pub fn couple_node(&self, id: MemberId) -> Option<CoupleNode> {
        self.index().couple_node(id)
    }

    /// Lazy depth-first generation walk starting from every root.
    pub fn traverse(&self) -> Traversal<'_> {
        Traversal::new(self)
    }
}
