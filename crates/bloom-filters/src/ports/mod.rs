//! Ports Layer - Trait definitions
//!
//! - Inbound: the membership contract callers program against

pub mod inbound;

pub use inbound::MembershipFilter;
