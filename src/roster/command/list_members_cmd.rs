use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::members::dto::MemberDto;
use crate::roster::domain::RosterService;

pub(crate) struct ListMembersCommand {
    roster_service: Box<dyn RosterService>,
}

impl ListMembersCommand {
    pub(crate) fn new(roster_service: Box<dyn RosterService>) -> Self {
        Self {
            roster_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListMembersCommandRequest {
}

impl ListMembersCommandRequest {
    pub fn new() -> Self {
        Self {
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListMembersCommandResponse {
    pub members: Vec<MemberDto>,
}

impl ListMembersCommandResponse {
    pub fn new(members: Vec<MemberDto>) -> Self {
        Self {
            members,
        }
    }
}

#[async_trait]
impl Command<ListMembersCommandRequest, ListMembersCommandResponse> for ListMembersCommand {
    async fn execute(&self, _req: ListMembersCommandRequest) -> Result<ListMembersCommandResponse, CommandError> {
        self.roster_service.list_members().await
            .map_err(CommandError::from).map(ListMembersCommandResponse::new)
    }
}
