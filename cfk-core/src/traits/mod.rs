//! Collaborator contracts
//!
//! The console core never talks to a cluster or to the configuration file
//! directly; it goes through these traits. Each trait ships with an
//! in-memory implementation usable on every platform.

mod cluster_adapter;
mod profile_store;

pub use cluster_adapter::{ClusterClient, ClusterConnector, InMemoryCluster, InMemoryClusterClient};
pub use profile_store::{MemoryProfileStore, ProfileStore};
