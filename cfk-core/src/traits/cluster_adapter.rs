//! Cluster adapter abstract Trait

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::types::{ClusterProfile, TopicDetail};

/// Cluster Connector Trait
///
/// Opens a session against the cluster described by a profile.
#[async_trait]
pub trait ClusterConnector: Send + Sync {
    /// Connect to a cluster
    ///
    /// # Arguments
    /// * `profile` - Cluster profile
    async fn connect(&self, profile: &ClusterProfile) -> CoreResult<Arc<dyn ClusterClient>>;
}

/// Cluster Client Trait
///
/// One live connection. Every call fails with [`CoreError::NotConnected`]
/// once the client has been closed.
#[async_trait]
pub trait ClusterClient: Send + Sync + fmt::Debug {
    /// Name of the profile this client is connected to
    fn cluster_name(&self) -> &str;

    /// List topic names
    async fn list_topics(&self, timeout: Duration) -> CoreResult<Vec<String>>;

    /// Get topic details
    ///
    /// # Arguments
    /// * `name` - Topic name
    async fn get_topic_info(&self, name: &str, timeout: Duration) -> CoreResult<TopicDetail>;

    /// Create a topic
    async fn create_topic(
        &self,
        name: &str,
        partitions: u32,
        replication_factor: u32,
        timeout: Duration,
    ) -> CoreResult<()>;

    /// Delete a topic
    async fn delete_topic(&self, name: &str, timeout: Duration) -> CoreResult<()>;

    /// Raise the partition count of a topic
    ///
    /// Fails unless `partitions` is strictly greater than the current count.
    async fn update_topic_partitions(
        &self,
        name: &str,
        partitions: u32,
        timeout: Duration,
    ) -> CoreResult<()>;

    /// Close the connection
    async fn close(&self) -> CoreResult<()>;
}

type TopicTable = Arc<RwLock<BTreeMap<String, TopicDetail>>>;

/// In-memory cluster
///
/// Simulates one broker per profile name. Topic state survives reconnects
/// for the lifetime of the value, so the console can be exercised without a
/// real cluster.
#[derive(Clone, Default)]
pub struct InMemoryCluster {
    brokers: Arc<RwLock<HashMap<String, TopicTable>>>,
    latency: Duration,
}

impl InMemoryCluster {
    /// Create a new in-memory cluster
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every call by `latency`
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Replace the topics of the broker behind `cluster`
    pub async fn seed(&self, cluster: &str, topics: Vec<TopicDetail>) {
        let table = self.table_for(cluster).await;
        let mut guard = table.write().await;
        guard.clear();
        for topic in topics {
            guard.insert(topic.name.clone(), topic);
        }
    }

    async fn table_for(&self, cluster: &str) -> TopicTable {
        let mut brokers = self.brokers.write().await;
        Arc::clone(brokers.entry(cluster.to_string()).or_insert_with(|| {
            let mut topics = BTreeMap::new();
            for topic in [
                TopicDetail::new("__consumer_offsets", 50, Some(1)),
                TopicDetail::new("_schemas", 1, Some(1)),
            ] {
                topics.insert(topic.name.clone(), topic);
            }
            Arc::new(RwLock::new(topics))
        }))
    }
}

/// Check that an endpoint looks like `host:port`
fn validate_endpoint(endpoint: &str) -> CoreResult<()> {
    let invalid = || CoreError::ConnectionFailed(format!("invalid bootstrap server \"{endpoint}\""));
    let (host, port) = endpoint.rsplit_once(':').ok_or_else(invalid)?;
    if host.trim().is_empty() {
        return Err(invalid());
    }
    port.parse::<u16>().map_err(|_| invalid())?;
    Ok(())
}

#[async_trait]
impl ClusterConnector for InMemoryCluster {
    async fn connect(&self, profile: &ClusterProfile) -> CoreResult<Arc<dyn ClusterClient>> {
        if profile.endpoints.is_empty() {
            return Err(CoreError::ConnectionFailed(format!(
                "no bootstrap servers configured for {}",
                profile.name
            )));
        }
        for endpoint in &profile.endpoints {
            validate_endpoint(endpoint)?;
        }
        if profile.sasl_enabled && profile.username.is_none() {
            return Err(CoreError::ConnectionFailed(
                "SASL is enabled but no username is configured".to_string(),
            ));
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let topics = self.table_for(&profile.name).await;
        tracing::debug!(cluster = %profile.name, "in-memory cluster session opened");

        Ok(Arc::new(InMemoryClusterClient {
            cluster: profile.name.clone(),
            topics,
            latency: self.latency,
            closed: AtomicBool::new(false),
        }))
    }
}

/// Session handed out by [`InMemoryCluster`]
#[derive(Debug)]
pub struct InMemoryClusterClient {
    cluster: String,
    topics: TopicTable,
    latency: Duration,
    closed: AtomicBool,
}

impl InMemoryClusterClient {
    /// Simulated network round trip
    async fn round_trip(&self, operation: &str, timeout: Duration) -> CoreResult<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(CoreError::NotConnected);
        }
        if self.latency > timeout {
            tokio::time::sleep(timeout).await;
            return Err(CoreError::timeout(operation, timeout));
        }
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(())
    }
}

#[async_trait]
impl ClusterClient for InMemoryClusterClient {
    fn cluster_name(&self) -> &str {
        &self.cluster
    }

    async fn list_topics(&self, timeout: Duration) -> CoreResult<Vec<String>> {
        self.round_trip("list topics", timeout).await?;
        Ok(self.topics.read().await.keys().cloned().collect())
    }

    async fn get_topic_info(&self, name: &str, timeout: Duration) -> CoreResult<TopicDetail> {
        self.round_trip("describe topic", timeout).await?;
        self.topics
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| CoreError::TopicNotFound(name.to_string()))
    }

    async fn create_topic(
        &self,
        name: &str,
        partitions: u32,
        replication_factor: u32,
        timeout: Duration,
    ) -> CoreResult<()> {
        self.round_trip("create topic", timeout).await?;
        if name.trim().is_empty() {
            return Err(CoreError::InvalidInput("topic name is required".to_string()));
        }
        if partitions == 0 || replication_factor == 0 {
            return Err(CoreError::InvalidInput(
                "partitions and replication factor must be at least 1".to_string(),
            ));
        }

        let mut topics = self.topics.write().await;
        if topics.contains_key(name) {
            return Err(CoreError::InvalidInput(format!("topic {name} already exists")));
        }
        topics.insert(
            name.to_string(),
            TopicDetail::new(name, partitions, Some(replication_factor)),
        );
        Ok(())
    }

    async fn delete_topic(&self, name: &str, timeout: Duration) -> CoreResult<()> {
        self.round_trip("delete topic", timeout).await?;
        self.topics
            .write()
            .await
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| CoreError::TopicNotFound(name.to_string()))
    }

    async fn update_topic_partitions(
        &self,
        name: &str,
        partitions: u32,
        timeout: Duration,
    ) -> CoreResult<()> {
        self.round_trip("update partitions", timeout).await?;
        let mut topics = self.topics.write().await;
        let topic = topics
            .get_mut(name)
            .ok_or_else(|| CoreError::TopicNotFound(name.to_string()))?;
        if partitions <= topic.partition_count {
            return Err(CoreError::InvalidInput(format!(
                "partition count can only be increased (current: {})",
                topic.partition_count
            )));
        }
        topic.partition_count = partitions;
        Ok(())
    }

    async fn close(&self) -> CoreResult<()> {
        self.closed.store(true, Ordering::SeqCst);
        tracing::debug!(cluster = %self.cluster, "in-memory cluster session closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Duration = Duration::from_secs(10);

    fn local() -> ClusterProfile {
        ClusterProfile::new("local", vec!["localhost:9092".to_string()])
    }

    #[tokio::test]
    async fn connect_seeds_internal_topics() {
        let cluster = InMemoryCluster::new();
        let client = cluster.connect(&local()).await.unwrap();

        assert_eq!(client.cluster_name(), "local");
        let topics = client.list_topics(T).await.unwrap();
        assert_eq!(topics, vec!["__consumer_offsets", "_schemas"]);
    }

    #[tokio::test]
    async fn connect_rejects_bad_endpoints() {
        let cluster = InMemoryCluster::new();

        let empty = ClusterProfile::new("empty", vec![]);
        assert!(matches!(
            cluster.connect(&empty).await,
            Err(CoreError::ConnectionFailed(_))
        ));

        let no_port = ClusterProfile::new("bad", vec!["localhost".to_string()]);
        assert!(matches!(
            cluster.connect(&no_port).await,
            Err(CoreError::ConnectionFailed(_))
        ));
    }

    #[tokio::test]
    async fn partitions_only_grow() {
        let cluster = InMemoryCluster::new();
        let client = cluster.connect(&local()).await.unwrap();
        client.create_topic("orders", 3, 1, T).await.unwrap();

        let shrink = client.update_topic_partitions("orders", 2, T).await;
        assert!(matches!(shrink, Err(CoreError::InvalidInput(_))));
        let same = client.update_topic_partitions("orders", 3, T).await;
        assert!(matches!(same, Err(CoreError::InvalidInput(_))));

        client.update_topic_partitions("orders", 6, T).await.unwrap();
        let detail = client.get_topic_info("orders", T).await.unwrap();
        assert_eq!(detail.partition_count, 6);
        assert_eq!(detail.replication_factor, Some(1));
    }

    #[tokio::test]
    async fn delete_missing_topic_is_not_found() {
        let cluster = InMemoryCluster::new();
        let client = cluster.connect(&local()).await.unwrap();
        let result = client.delete_topic("ghost", T).await;
        assert_eq!(result, Err(CoreError::TopicNotFound("ghost".to_string())));
    }

    #[tokio::test]
    async fn closed_client_is_not_connected() {
        let cluster = InMemoryCluster::new();
        let client = cluster.connect(&local()).await.unwrap();
        client.close().await.unwrap();

        assert_eq!(client.list_topics(T).await, Err(CoreError::NotConnected));
    }

    #[tokio::test]
    async fn state_survives_reconnect() {
        let cluster = InMemoryCluster::new();
        cluster
            .seed("local", vec![TopicDetail::new("orders", 1, None)])
            .await;

        let first = cluster.connect(&local()).await.unwrap();
        first.create_topic("payments", 2, 1, T).await.unwrap();
        first.close().await.unwrap();

        let second = cluster.connect(&local()).await.unwrap();
        assert_eq!(second.list_topics(T).await.unwrap(), vec!["orders", "payments"]);
    }

    #[tokio::test(start_paused = true)]
    async fn latency_beyond_timeout_times_out() {
        let cluster = InMemoryCluster::new().with_latency(Duration::from_secs(30));
        let client = cluster.connect(&local()).await.unwrap();

        let result = client.list_topics(Duration::from_secs(1)).await;
        assert!(matches!(result, Err(CoreError::Timeout { .. })));
    }
}
