//! Session recording model
//!
//! The entities recorded for one AI-assisted development session and their
//! structural validation. Rendering and persistence live in [`crate::report`].

pub mod model;

pub use model::{generate_session_id, validate, AgentKind, CodeChange, Session, SubAgent};
