//! Core logic for the Teamtree client.
//!
//! Holds everything with branching logic or invariants: the three-tier role
//! hierarchy, profile tree parsing, projection of a tree into renderable
//! sections, tier derivation for registration, and the session gate. No
//! networking and no terminal output live here; the HTTP boundary is
//! `auth-client` and the presentation is `teamtree-cli`.
//!
//! # Example
//!
//! ```rust,ignore
//! use teamtree_core::{compose_sections, parse_profile};
//!
//! let tree = parse_profile(&raw_json)?;
//! for section in compose_sections(&tree) {
//!     render(section);
//! }
//! ```

pub mod compose;
pub mod model;
pub mod registration;
pub mod role;
pub mod session;

pub use compose::{compose_sections, Section, SubAdminEntry};
pub use model::{parse_profile, Account, Children, ParseError, ProfileTree, SubAdminNode};
pub use registration::{resolve_tier, ParentCandidate, SubmitGuard, SubmitPermit, TierResolution};
pub use role::Role;
pub use session::{
    check_session, establish_session, logout, MemorySessionStore, SessionState, SessionStore,
    ROLE_KEY, TOKEN_KEY, USER_FLAG_KEY,
};
