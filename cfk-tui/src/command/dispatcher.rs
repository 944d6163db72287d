//! 命令派发器

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::runtime::Handle;
use tracing::instrument::WithSubscriber;

use cfk_core::{ClusterClient, ClusterConnector, CoreError, CoreResult, ErrorKind, ProfileStore};

use super::{Command, Delivery, Envelope, QueueEvent, QueueSender};
use crate::message::{AppError, ResultMessage};
use crate::model::domain::TopicItem;

/// 单条命令的超时时间
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(10);

/// 命令执行需要的后端
struct Backends {
    connector: Arc<dyn ClusterConnector>,
    store: Arc<dyn ProfileStore>,
}

/// 命令派发器
///
/// `issue` 立即返回。每条命令恰好向事件队列送回一条 `Delivery`，
/// 包括超时和 worker panic 的情况。命令一旦发出不会被取消。
#[derive(Clone)]
pub struct Dispatcher {
    runtime: Handle,
    sender: QueueSender,
    backends: Arc<Backends>,
    timeout: Duration,
}

impl Dispatcher {
    pub fn new(
        runtime: Handle,
        sender: QueueSender,
        connector: Arc<dyn ClusterConnector>,
        store: Arc<dyn ProfileStore>,
    ) -> Self {
        Self {
            runtime,
            sender,
            backends: Arc::new(Backends { connector, store }),
            timeout: COMMAND_TIMEOUT,
        }
    }

    #[cfg(test)]
    fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 派发一组命令
    pub fn issue_all(&self, envelopes: impl IntoIterator<Item = Envelope>) {
        for envelope in envelopes {
            self.issue(envelope);
        }
    }

    /// 派发一条命令
    pub fn issue(&self, envelope: Envelope) {
        let Envelope { epoch, command } = envelope;
        let operation = command.operation();
        tracing::debug!(operation, ?epoch, "issuing command");

        let backends = Arc::clone(&self.backends);
        let timeout = self.timeout;
        let worker = self.runtime.spawn(
            async move {
                let result = match tokio::time::timeout(timeout, execute(command, &backends, timeout)).await {
                    Ok(result) => result,
                    Err(_) => Err(CoreError::timeout(operation, timeout)),
                };
                match result {
                    Ok(message) => {
                        tracing::debug!(operation, "command finished");
                        message
                    }
                    Err(e) => {
                        if e.is_expected() {
                            tracing::warn!(operation, error = %e, "command failed");
                        } else {
                            tracing::error!(operation, error = %e, "command failed");
                        }
                        ResultMessage::from(e)
                    }
                }
            }
            .with_current_subscriber(),
        );

        let sender = self.sender.clone();
        self.runtime.spawn(
            async move {
                let message = match worker.await {
                    Ok(message) => message,
                    Err(e) => {
                        let reason = if e.is_panic() {
                            panic_reason(e.into_panic())
                        } else {
                            e.to_string()
                        };
                        tracing::error!(operation, %reason, "command worker died");
                        ResultMessage::Error(AppError::new(
                            ErrorKind::Internal,
                            format!("{operation} failed: {reason}"),
                        ))
                    }
                };
                if sender
                    .send(QueueEvent::Delivery(Delivery { epoch, message }))
                    .is_err()
                {
                    tracing::debug!(operation, "event queue closed, result dropped");
                }
            }
            .with_current_subscriber(),
        );
    }
}

fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}

fn require(client: Option<Arc<dyn ClusterClient>>) -> CoreResult<Arc<dyn ClusterClient>> {
    client.ok_or(CoreError::NotConnected)
}

/// 执行命令
async fn execute(command: Command, backends: &Backends, timeout: Duration) -> CoreResult<ResultMessage> {
    match command {
        Command::Connect(profile) => {
            let client = backends.connector.connect(&profile).await?;
            tracing::info!(cluster = %profile.name, "connected");
            Ok(ResultMessage::Connected {
                cluster: profile.name,
                client,
            })
        }

        Command::ListTopics { client } => {
            let names = require(client)?.list_topics(timeout).await?;
            Ok(ResultMessage::TopicsLoaded(names))
        }

        Command::DescribeTopics { client, names } => {
            let client = require(client)?;
            let lookups = names.into_iter().map(|name| {
                let client = Arc::clone(&client);
                async move {
                    match client.get_topic_info(&name, timeout).await {
                        Ok(detail) => TopicItem::from(detail),
                        Err(e) => {
                            tracing::debug!(topic = %name, error = %e, "describe failed");
                            TopicItem::new(name)
                        }
                    }
                }
            });
            Ok(ResultMessage::ItemsUpdated(join_all(lookups).await))
        }

        Command::GetTopicInfo {
            client,
            name,
            purpose,
        } => {
            let detail = require(client)?.get_topic_info(&name, timeout).await?;
            Ok(ResultMessage::TopicInfoLoaded { detail, purpose })
        }

        Command::CreateTopic {
            client,
            name,
            partitions,
            replication_factor,
        } => {
            require(client)?
                .create_topic(&name, partitions, replication_factor, timeout)
                .await?;
            tracing::info!(topic = %name, partitions, replication_factor, "topic created");
            Ok(ResultMessage::TopicCreated { name })
        }

        Command::DeleteTopic { client, name } => {
            require(client)?.delete_topic(&name, timeout).await?;
            tracing::info!(topic = %name, "topic deleted");
            Ok(ResultMessage::TopicDeleted { name })
        }

        Command::UpdateTopicPartitions {
            client,
            name,
            partitions,
        } => {
            require(client)?
                .update_topic_partitions(&name, partitions, timeout)
                .await?;
            tracing::info!(topic = %name, partitions, "partitions updated");
            Ok(ResultMessage::TopicPartitionsUpdated { name, partitions })
        }

        Command::Close(client) => {
            let cluster = client.cluster_name().to_string();
            client.close().await?;
            tracing::info!(%cluster, "disconnected");
            Ok(ResultMessage::Disconnected { cluster })
        }

        Command::LoadProfiles => Ok(ResultMessage::ProfilesLoaded(
            backends.store.load_profiles().await?,
        )),

        Command::SaveProfiles { profiles, removed } => {
            backends.store.save_profiles(&profiles).await?;
            Ok(match removed {
                Some(name) => ResultMessage::ClusterRemoved { name },
                None => ResultMessage::ProfilesSaved(profiles),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    use cfk_core::{ClusterProfile, InMemoryCluster, MemoryProfileStore, TopicDetail};

    use super::*;

    struct PanickingConnector;

    #[async_trait]
    impl ClusterConnector for PanickingConnector {
        async fn connect(&self, _profile: &ClusterProfile) -> CoreResult<Arc<dyn ClusterClient>> {
            panic!("adapter exploded");
        }
    }

    fn local() -> ClusterProfile {
        ClusterProfile::new("local", vec!["localhost:9092".to_string()])
    }

    fn dispatcher_with(
        connector: Arc<dyn ClusterConnector>,
        store: Arc<dyn ProfileStore>,
    ) -> (Dispatcher, UnboundedReceiver<QueueEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Dispatcher::new(Handle::current(), tx, connector, store), rx)
    }

    async fn next_delivery(rx: &mut UnboundedReceiver<QueueEvent>) -> Delivery {
        match rx.recv().await {
            Some(QueueEvent::Delivery(delivery)) => delivery,
            other => panic!("expected a delivery, got {other:?}"),
        }
    }

    async fn connect(dispatcher: &Dispatcher, rx: &mut UnboundedReceiver<QueueEvent>) -> Arc<dyn ClusterClient> {
        dispatcher.issue(Envelope::scoped(1, Command::Connect(local())));
        match next_delivery(rx).await.message {
            ResultMessage::Connected { client, .. } => client,
            other => panic!("expected Connected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn connect_delivers_client_with_epoch() {
        let (dispatcher, mut rx) = dispatcher_with(
            Arc::new(InMemoryCluster::new()),
            Arc::new(MemoryProfileStore::default()),
        );

        dispatcher.issue(Envelope::scoped(7, Command::Connect(local())));
        let delivery = next_delivery(&mut rx).await;

        assert_eq!(delivery.epoch, Some(7));
        match delivery.message {
            ResultMessage::Connected { cluster, client } => {
                assert_eq!(cluster, "local");
                assert_eq!(client.cluster_name(), "local");
            }
            other => panic!("expected Connected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn client_commands_without_connection_are_not_connected() {
        let (dispatcher, mut rx) = dispatcher_with(
            Arc::new(InMemoryCluster::new()),
            Arc::new(MemoryProfileStore::default()),
        );

        dispatcher.issue(Envelope::scoped(1, Command::ListTopics { client: None }));
        dispatcher.issue(Envelope::session(Command::DeleteTopic {
            client: None,
            name: "orders".into(),
        }));

        for _ in 0..2 {
            match next_delivery(&mut rx).await.message {
                ResultMessage::Error(err) => assert_eq!(err.kind, ErrorKind::NotConnected),
                other => panic!("expected NotConnected, got {other:?}"),
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn slow_command_times_out() {
        let slow = InMemoryCluster::new().with_latency(Duration::from_secs(30));
        let (dispatcher, mut rx) =
            dispatcher_with(Arc::new(slow), Arc::new(MemoryProfileStore::default()));

        dispatcher.issue(Envelope::scoped(3, Command::Connect(local())));
        let delivery = next_delivery(&mut rx).await;

        assert_eq!(delivery.epoch, Some(3));
        match delivery.message {
            ResultMessage::Error(err) => {
                assert_eq!(err.kind, ErrorKind::Timeout);
                assert_eq!(err.message, "connect timed out after 10s");
            }
            other => panic!("expected a timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn panicking_worker_delivers_exactly_one_internal_error() {
        let (dispatcher, mut rx) = dispatcher_with(
            Arc::new(PanickingConnector),
            Arc::new(MemoryProfileStore::default()),
        );

        dispatcher.issue(Envelope::scoped(2, Command::Connect(local())));
        let delivery = next_delivery(&mut rx).await;

        match delivery.message {
            ResultMessage::Error(err) => {
                assert_eq!(err.kind, ErrorKind::Internal);
                assert!(err.message.contains("adapter exploded"));
            }
            other => panic!("expected an internal error, got {other:?}"),
        }

        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn describe_fans_out_and_tolerates_missing_topics() {
        let cluster = InMemoryCluster::new();
        cluster
            .seed("local", vec![TopicDetail::new("orders", 3, Some(1))])
            .await;
        let (dispatcher, mut rx) =
            dispatcher_with(Arc::new(cluster), Arc::new(MemoryProfileStore::default()));
        let client = connect(&dispatcher, &mut rx).await;

        dispatcher.issue(Envelope::scoped(
            1,
            Command::DescribeTopics {
                client: Some(client),
                names: vec!["orders".into(), "ghost".into()],
            },
        ));

        match next_delivery(&mut rx).await.message {
            ResultMessage::ItemsUpdated(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].detail.as_ref().map(|d| d.partition_count), Some(3));
                assert_eq!(items[1].name, "ghost");
                assert!(items[1].detail.is_none());
            }
            other => panic!("expected ItemsUpdated, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn save_profiles_reports_removal_and_persist_failures() {
        let store = Arc::new(MemoryProfileStore::new(vec![local()]));
        let (dispatcher, mut rx) =
            dispatcher_with(Arc::new(InMemoryCluster::new()), Arc::clone(&store) as Arc<dyn ProfileStore>);

        dispatcher.issue(Envelope::session(Command::SaveProfiles {
            profiles: Vec::new(),
            removed: Some("local".into()),
        }));
        match next_delivery(&mut rx).await.message {
            ResultMessage::ClusterRemoved { name } => assert_eq!(name, "local"),
            other => panic!("expected ClusterRemoved, got {other:?}"),
        }
        assert!(store.snapshot().await.is_empty());

        store.set_save_error(Some("read-only".into())).await;
        dispatcher.issue(Envelope::session(Command::SaveProfiles {
            profiles: vec![local()],
            removed: None,
        }));
        match next_delivery(&mut rx).await.message {
            ResultMessage::Error(err) => assert_eq!(err.kind, ErrorKind::ConfigPersistFailed),
            other => panic!("expected a persist failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn custom_timeout_applies_to_adapter_calls() {
        let slow = InMemoryCluster::new().with_latency(Duration::from_millis(50));
        let (dispatcher, mut rx) =
            dispatcher_with(Arc::new(slow), Arc::new(MemoryProfileStore::default()));
        let dispatcher = dispatcher.with_timeout(Duration::from_millis(10));

        dispatcher.issue(Envelope::scoped(1, Command::Connect(local())));

        match next_delivery(&mut rx).await.message {
            ResultMessage::Error(err) => assert_eq!(err.kind, ErrorKind::Timeout),
            other => panic!("expected a timeout, got {other:?}"),
        }
    }
}
