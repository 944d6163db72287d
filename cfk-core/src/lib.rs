//! cfk Core Library
//!
//! Platform-independent building blocks for the cfk cluster console:
//! - Domain types (cluster profiles, topic details)
//! - The unified error taxonomy
//! - Collaborator contracts: the cluster adapter and the profile store
//!
//! The wire protocol and the configuration file format live behind traits,
//! so the console can run against the in-memory implementations shipped here
//! or against any real adapter.

pub mod error;
pub mod traits;
pub mod types;

// Re-export common types
pub use error::{CoreError, CoreResult, ErrorKind};
pub use traits::{
    ClusterClient, ClusterConnector, InMemoryCluster, MemoryProfileStore, ProfileStore,
};
pub use types::{ClusterProfile, Secret, TopicDetail};
