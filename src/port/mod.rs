//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! The scan core talks to the outside world through a single outbound
//! port, [`RangeFetcher`]. Adapters implement it for a real catalog API;
//! the testkit implements it for an in-memory catalog.
//!
//! ```text
//!        ┌──────────────────────────┐
//!        │   Application (scan)     │
//!        │   Domain + Port          │
//!        └────────────┬─────────────┘
//!                     │ RangeFetcher
//!          ┌──────────┴──────────┐
//!          ▼                     ▼
//!   ┌─────────────┐      ┌───────────────┐
//!   │ HTTP catalog│      │ Simulated     │
//!   │   adapter   │      │ catalog (test)│
//!   └─────────────┘      └───────────────┘
//! ```

pub mod outbound;

pub use outbound::catalog::RangeFetcher;
