//! Parties domain module (buyers and sellers).
//!
//! The sale workflow treats parties as opaque identities: it carries them on
//! the order and hands them to collaborators, never inspecting them itself.

pub mod party;

pub use party::Party;
