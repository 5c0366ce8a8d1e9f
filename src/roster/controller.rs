use crate::core::command::{Command, CommandError};
use crate::core::controller::AppState;
use crate::roster::command::list_members_cmd::{ListMembersCommand, ListMembersCommandRequest, ListMembersCommandResponse};
use crate::roster::command::register_member_cmd::{RegisterMemberCommand, RegisterMemberCommandRequest, RegisterMemberCommandResponse};
use crate::roster::domain::RosterService;
use crate::roster::factory;

async fn build_service(state: &AppState) -> Box<dyn RosterService> {
    factory::create_roster_service(&state.config, state.store).await
}

pub(crate) async fn register_member(
    state: &AppState,
    req: RegisterMemberCommandRequest) -> Result<RegisterMemberCommandResponse, CommandError> {
    let svc = build_service(state).await;
    RegisterMemberCommand::new(svc).execute(req).await
}

pub(crate) async fn list_members(
    state: &AppState) -> Result<ListMembersCommandResponse, CommandError> {
    let svc = build_service(state).await;
    ListMembersCommand::new(svc).execute(ListMembersCommandRequest::new()).await
}
