//! Business logic services (use cases).
//!
//! Services enforce the roster rules on top of the repository traits (ports)
//! -- never on concrete infrastructure implementations.

pub mod activity;
