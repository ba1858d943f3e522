//! Infrastructure adapters for the Claimflow shell.
//!
//! Concrete implementations of the core repository traits plus the ambient
//! concerns: configuration storage, platform paths, and tracing setup.
//! Persistence of domain records is deliberately in-memory here - claims
//! and conversations live behind remote services in production, and the
//! shell never assumes a local database.

pub mod config_service;
pub mod config_store;
pub mod in_memory;
pub mod paths;
pub mod telemetry;

pub use config_service::ConfigService;
pub use config_store::ConfigStore;
pub use in_memory::{InMemoryClaimRepository, InMemoryConversationRepository};
pub use paths::ClaimflowPaths;
