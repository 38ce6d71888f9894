//! gRPC transport for `item.v1.ItemService`

use domain_items::{CreateItem, ErrorKind, ItemError, ItemRepository, ItemService, parse_item_id};
use grpc_server::{ToTonicResult, internal_status};
use rpc::item::v1::{
    CreateItemRequest, CreateItemResponse, DeleteItemRequest, DeleteItemResponse,
    GetAllItemsRequest, GetAllItemsResponse, GetItemRequest, GetItemResponse,
    item_service_server::ItemService as ItemRpc,
};
use tonic::{Request, Response, Status};
use tracing::{debug, warn};

pub struct ItemServiceImpl<R>
where
    R: ItemRepository + 'static,
{
    service: ItemService<R>,
}

impl<R> ItemServiceImpl<R>
where
    R: ItemRepository + 'static,
{
    pub fn new(service: ItemService<R>) -> Self {
        Self { service }
    }
}

/// Log a request rejected before reaching the service.
fn rejected(op: &'static str, status: Status) -> Status {
    warn!(op, kind = %ErrorKind::ValidationFailed, details = status.message(), "request rejected");
    status
}

/// Every service failure leaves as the same opaque INTERNAL status.
fn service_status(err: ItemError) -> Status {
    debug!(op = err.op(), kind = %err.kind(), error = %err, "responding with INTERNAL");
    internal_status()
}

#[tonic::async_trait]
impl<R> ItemRpc for ItemServiceImpl<R>
where
    R: ItemRepository + 'static,
{
    async fn create_item(
        &self,
        request: Request<CreateItemRequest>,
    ) -> Result<Response<CreateItemResponse>, Status> {
        let input: CreateItem = request.into_inner().into();

        let item = input
            .validated()
            .to_tonic()
            .map_err(|status| rejected("grpc.create_item", status))?;

        let id = self
            .service
            .create_item(item)
            .await
            .map_err(service_status)?;

        Ok(Response::new(CreateItemResponse {
            item_id: id.to_string(),
        }))
    }

    async fn get_item(
        &self,
        request: Request<GetItemRequest>,
    ) -> Result<Response<GetItemResponse>, Status> {
        let req = request.into_inner();
        let id = parse_item_id(&req.item_id)
            .to_tonic()
            .map_err(|status| rejected("grpc.get_item", status))?;

        let item = self.service.get_item(id).await.map_err(service_status)?;

        Ok(Response::new(GetItemResponse {
            item: Some(item.into()),
        }))
    }

    async fn get_all_items(
        &self,
        _request: Request<GetAllItemsRequest>,
    ) -> Result<Response<GetAllItemsResponse>, Status> {
        let items = self
            .service
            .get_all_items()
            .await
            .map_err(service_status)?;

        Ok(Response::new(GetAllItemsResponse {
            items: items.into_iter().map(Into::into).collect(),
        }))
    }

    async fn delete_item(
        &self,
        request: Request<DeleteItemRequest>,
    ) -> Result<Response<DeleteItemResponse>, Status> {
        let req = request.into_inner();
        let id = parse_item_id(&req.item_id)
            .to_tonic()
            .map_err(|status| rejected("grpc.delete_item", status))?;

        self.service
            .delete_item(id)
            .await
            .map_err(service_status)?;

        Ok(Response::new(DeleteItemResponse {}))
    }
}
