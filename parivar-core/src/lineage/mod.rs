//! Family lineage graph engine.
//!
//! Builds a consistent forest from a flat collection of members linked
//! only by `parent_id` and `spouse_id` references, renders it
//! deterministically as paired generations, and keeps it referentially
//! consistent across member insertion, update and deletion.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                          Lineage                              │
//! │                                                               │
//! │  ┌────────────────┐      ┌─────────────────────────────────┐  │
//! │  │ Member store   │◀─────│ Mutation engine (sole writer)   │  │
//! │  │ (ordered, flat)│      │ add / update / delete + scrub   │  │
//! │  └───────┬────────┘      └─────────────────────────────────┘  │
//! │          │ snapshot                                           │
//! │          ▼                                                    │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────┐   │
//! │  │ LineageIndex   │─▶│ Root resolver  │─▶│ Generation     │   │
//! │  │ (id→member,    │  │ + couple       │  │ traversal      │   │
//! │  │  parent→kids)  │  │   pairing      │  │ (lazy DFS)     │   │
//! │  └────────────────┘  └────────────────┘  └────────────────┘   │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! The read side is recomputed from the current store snapshot after
//! every mutation; nothing is cached across writes.

mod member;
mod store;
mod tree;

pub use member::{Gender, Member, MemberDraft, MemberId, MemberUpdate};
pub use store::{DeleteMode, Lineage, LineageError};
pub use tree::{CoupleNode, GenerationNode, LineageIndex, Traversal};
