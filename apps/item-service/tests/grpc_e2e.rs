//! End-to-end tests over a real socket, backed by the in-memory repository.

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use domain_items::{InMemoryItemRepository, Item, ItemRepository, ItemService, NewItem, StorageResult};
use grpc_server::server::ServerConfig;
use item_service::{ItemServiceImpl, serve};
use rpc::item::v1::item_service_client::ItemServiceClient;
use rpc::item::v1::{CreateItemRequest, DeleteItemRequest, GetAllItemsRequest, GetItemRequest};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tonic::Code;
use tonic::codec::CompressionEncoding;
use tonic::transport::Channel;
use tonic_health::pb::HealthCheckRequest;
use tonic_health::pb::health_check_response::ServingStatus;
use tonic_health::pb::health_client::HealthClient;
use uuid::Uuid;

/// Repository that sleeps before listing, to keep a call in flight
#[derive(Clone, Default)]
struct SlowRepository {
    inner: InMemoryItemRepository,
    delay: Duration,
}

#[async_trait]
impl ItemRepository for SlowRepository {
    async fn save_item(&self, item: &NewItem) -> StorageResult<Uuid> {
        self.inner.save_item(item).await
    }

    async fn get_item(&self, id: Uuid) -> StorageResult<Item> {
        self.inner.get_item(id).await
    }

    async fn get_all_items(&self) -> StorageResult<Vec<Item>> {
        tokio::time::sleep(self.delay).await;
        self.inner.get_all_items().await
    }

    async fn delete_item(&self, id: Uuid) -> StorageResult<()> {
        self.inner.delete_item(id).await
    }
}

struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<grpc_server::GrpcResult<()>>,
}

impl TestServer {
    async fn start<R: ItemRepository + 'static>(repo: R) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handler = ItemServiceImpl::new(ItemService::new(repo));
        let config = ServerConfig::new().with_host("127.0.0.1").with_port(addr.port());

        let handle = tokio::spawn(async move {
            serve(listener, handler, &config, async {
                let _ = rx.await;
            })
            .await
        });

        Self {
            addr,
            shutdown: Some(tx),
            handle,
        }
    }

    fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    async fn client(&self) -> ItemServiceClient<Channel> {
        ItemServiceClient::connect(self.endpoint())
            .await
            .unwrap()
            .send_compressed(CompressionEncoding::Zstd)
            .accept_compressed(CompressionEncoding::Zstd)
    }

    async fn health(&self) -> HealthClient<Channel> {
        let channel = Channel::from_shared(self.endpoint())
            .unwrap()
            .connect()
            .await
            .unwrap();
        HealthClient::new(channel)
    }

    fn begin_shutdown(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }

    async fn stop(mut self) {
        self.begin_shutdown();
        tokio::time::timeout(Duration::from_secs(10), self.handle)
            .await
            .expect("server did not stop")
            .unwrap()
            .unwrap();
    }
}

#[tokio::test]
async fn test_sword_lifecycle() {
    let server = TestServer::start(InMemoryItemRepository::new()).await;
    let mut client = server.client().await;

    let item_id = client
        .create_item(CreateItemRequest {
            name: "Sword".to_string(),
            rarity: "Rare".to_string(),
            description: Some("Sharp blade".to_string()),
        })
        .await
        .unwrap()
        .into_inner()
        .item_id;
    assert!(uuid::Uuid::parse_str(&item_id).is_ok());

    let item = client
        .get_item(GetItemRequest {
            item_id: item_id.clone(),
        })
        .await
        .unwrap()
        .into_inner()
        .item
        .unwrap();
    assert_eq!(
        (item.name.as_str(), item.rarity.as_str(), item.description.as_str()),
        ("Sword", "Rare", "Sharp blade")
    );

    let all = client
        .get_all_items(GetAllItemsRequest {})
        .await
        .unwrap()
        .into_inner();
    assert_eq!(all.items.len(), 1);

    client
        .delete_item(DeleteItemRequest {
            item_id: item_id.clone(),
        })
        .await
        .unwrap();

    let status = client
        .get_item(GetItemRequest { item_id })
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Internal);
    assert_eq!(status.message(), "internal error");

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_validation_error_reaches_client() {
    let server = TestServer::start(InMemoryItemRepository::new()).await;
    let mut client = server.client().await;

    let status = client
        .create_item(CreateItemRequest {
            name: "Sw".to_string(),
            rarity: "Rare".to_string(),
            description: None,
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert!(status.message().contains("name:"));
    assert!(status.message().contains("description: is required"));

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_health_reports_serving() {
    let server = TestServer::start(InMemoryItemRepository::new()).await;
    let mut health = server.health().await;

    for service in ["", "item.v1.ItemService"] {
        let response = health
            .check(HealthCheckRequest {
                service: service.to_string(),
            })
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.status(), ServingStatus::Serving, "service {:?}", service);
    }

    drop(health);
    server.stop().await;
}

#[tokio::test]
async fn test_graceful_shutdown_stops_accepting() {
    let server = TestServer::start(InMemoryItemRepository::new()).await;
    let endpoint = server.endpoint();

    let mut client = server.client().await;
    client.get_all_items(GetAllItemsRequest {}).await.unwrap();
    drop(client);

    server.stop().await;

    assert!(ItemServiceClient::connect(endpoint).await.is_err());
}

#[tokio::test]
async fn test_shutdown_lets_in_flight_call_finish() {
    let repo = SlowRepository {
        delay: Duration::from_millis(500),
        ..SlowRepository::default()
    };
    let mut server = TestServer::start(repo).await;
    let mut client = server.client().await;

    let in_flight = tokio::spawn(async move { client.get_all_items(GetAllItemsRequest {}).await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    server.begin_shutdown();

    let response = in_flight.await.unwrap().unwrap();
    assert!(response.into_inner().items.is_empty());

    server.stop().await;
}

#[tokio::test]
async fn test_health_turns_not_serving_on_shutdown() {
    let mut server = TestServer::start(InMemoryItemRepository::new()).await;
    let mut health = server.health().await;

    let mut updates = health
        .watch(HealthCheckRequest {
            service: String::new(),
        })
        .await
        .unwrap()
        .into_inner();

    let first = updates.message().await.unwrap().unwrap();
    assert_eq!(first.status(), ServingStatus::Serving);

    server.begin_shutdown();

    let next = tokio::time::timeout(Duration::from_secs(5), updates.message())
        .await
        .expect("no health update after shutdown")
        .unwrap()
        .unwrap();
    assert_eq!(next.status(), ServingStatus::NotServing);

    drop(updates);
    drop(health);
    server.stop().await;
}
