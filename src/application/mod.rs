//! Application services (use cases).
//!
//! These services orchestrate domain logic and drive the outbound ports
//! to implement the application's use cases.

pub mod scan;
