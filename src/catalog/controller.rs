use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest, AddItemCommandResponse};
use crate::catalog::command::borrow_item_cmd::{BorrowItemCommand, BorrowItemCommandRequest, BorrowItemCommandResponse};
use crate::catalog::command::delete_item_cmd::{DeleteItemCommand, DeleteItemCommandRequest, DeleteItemCommandResponse};
use crate::catalog::command::list_items_cmd::{ListItemsCommand, ListItemsCommandRequest, ListItemsCommandResponse};
use crate::catalog::command::return_item_cmd::{ReturnItemCommand, ReturnItemCommandRequest, ReturnItemCommandResponse};
use crate::catalog::command::search_items_cmd::{SearchItemsCommand, SearchItemsCommandRequest, SearchItemsCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::{Command, CommandError};
use crate::core::controller::AppState;

async fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.store).await
}

pub(crate) async fn add_item(
    state: &AppState,
    req: AddItemCommandRequest) -> Result<AddItemCommandResponse, CommandError> {
    let svc = build_service(state).await;
    AddItemCommand::new(svc).execute(req).await
}

pub(crate) async fn list_items(
    state: &AppState) -> Result<ListItemsCommandResponse, CommandError> {
    let svc = build_service(state).await;
    ListItemsCommand::new(svc).execute(ListItemsCommandRequest::new()).await
}

pub(crate) async fn search_items(
    state: &AppState,
    req: SearchItemsCommandRequest) -> Result<SearchItemsCommandResponse, CommandError> {
    let svc = build_service(state).await;
    SearchItemsCommand::new(svc).execute(req).await
}

pub(crate) async fn delete_item(
    state: &AppState,
    req: DeleteItemCommandRequest) -> Result<DeleteItemCommandResponse, CommandError> {
    let svc = build_service(state).await;
    DeleteItemCommand::new(svc).execute(req).await
}

pub(crate) async fn borrow_item(
    state: &AppState,
    req: BorrowItemCommandRequest) -> Result<BorrowItemCommandResponse, CommandError> {
    let svc = build_service(state).await;
    BorrowItemCommand::new(svc).execute(req).await
}

pub(crate) async fn return_item(
    state: &AppState,
    req: ReturnItemCommandRequest) -> Result<ReturnItemCommandResponse, CommandError> {
    let svc = build_service(state).await;
    ReturnItemCommand::new(svc).execute(req).await
}
