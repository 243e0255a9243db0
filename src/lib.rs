//! # group-split-gateway
//!
//! REST backend for shared-expense groups.
//!
//! A group has members and expenses. Each expense records who paid, how
//! much, and an opaque split strategy (`splitType` plus a `weights`
//! payload). Settling balances is left to clients; this service stores the
//! data and serves one aggregated document per group.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── GroupService (service/)
//!     ├── Group document shaping (domain/)
//!     │
//!     └── GroupStore (persistence/)
//!           ├── PostgreSQL
//!           └── in-memory
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
