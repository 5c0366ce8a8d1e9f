use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::members::dto::MemberDto;
use crate::roster::domain::RosterService;

pub(crate) struct RegisterMemberCommand {
    roster_service: Box<dyn RosterService>,
}

impl RegisterMemberCommand {
    pub(crate) fn new(roster_service: Box<dyn RosterService>) -> Self {
        Self {
            roster_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterMemberCommandRequest {
    pub(crate) name: String,
}

impl RegisterMemberCommandRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterMemberCommandResponse {
    pub member: MemberDto,
}

impl RegisterMemberCommandResponse {
    pub fn new(member: MemberDto) -> Self {
        Self {
            member,
        }
    }
}

#[async_trait]
impl Command<RegisterMemberCommandRequest, RegisterMemberCommandResponse> for RegisterMemberCommand {
    async fn execute(&self, req: RegisterMemberCommandRequest) -> Result<RegisterMemberCommandResponse, CommandError> {
        self.roster_service.register_member(req.name.as_str()).await
            .map_err(CommandError::from).map(RegisterMemberCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::roster::command::register_member_cmd::{RegisterMemberCommand, RegisterMemberCommandRequest};
    use crate::roster::factory;

    #[tokio::test]
    async fn test_should_run_register_member() {
        let svc = factory::create_roster_service(&Configuration::new("test"), RepositoryStore::Ephemeral).await;
        let cmd = RegisterMemberCommand::new(svc);

        let res = cmd.execute(RegisterMemberCommandRequest::new("Blossom Dopamu"))
            .await.expect("should register member");
        assert_eq!(1, res.member.member_id);
        assert_eq!("Blossom Dopamu", res.member.name.as_str());
    }
}
