//! Encoder Logic
//!
//! Pure state machines behind the encoder driver: edge interpretation,
//! range policy, position storage and edge debouncing. Nothing in here
//! touches hardware or takes a critical section.

pub mod debounce;
pub mod edge;
pub mod policy;
pub mod store;
