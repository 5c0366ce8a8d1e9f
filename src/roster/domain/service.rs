use async_trait::async_trait;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;
use crate::members::domain::model::MemberEntity;
use crate::members::dto::MemberDto;
use crate::members::repository::MemberRepository;
use crate::roster::domain::RosterService;

pub(crate) struct RosterServiceImpl {
    member_repository: Box<dyn MemberRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl RosterServiceImpl {
    pub(crate) fn new(_config: &Configuration, member_repository: Box<dyn MemberRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            member_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl RosterService for RosterServiceImpl {
    async fn register_member(&self, name: &str) -> LibraryResult<MemberDto> {
        let member_id = self.member_repository.next_member_id().await?;
        let entity = MemberEntity::new(member_id, name);
        let _ = self.member_repository.create(&entity).await.map(|_| ())?;
        let member = MemberDto::from(&entity);
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "members", entity.member_id.to_string().as_str(), &member)?).await?;
        Ok(member)
    }

    async fn list_members(&self) -> LibraryResult<Vec<MemberDto>> {
        let res = self.member_repository.find_all().await?;
        Ok(res.iter().map(MemberDto::from).collect())
    }
}

impl From<&MemberEntity> for MemberDto {
    fn from(other: &MemberEntity) -> Self {
        Self {
            member_id: other.member_id,
            name: other.name.to_string(),
            created_at: other.created_at,
        }
    }
}

impl From<&MemberDto> for MemberEntity {
    fn from(other: &MemberDto) -> Self {
        Self {
            member_id: other.member_id,
            name: other.name.to_string(),
            created_at: other.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::roster::domain::RosterService;
    use crate::roster::factory;

    #[tokio::test]
    async fn test_should_register_members_with_sequential_ids() {
        let roster_svc = factory::create_roster_service(&Configuration::new("test"), RepositoryStore::Ephemeral).await;

        for expected in 1..=4 {
            let member = roster_svc.register_member("Blossom Dopamu").await.expect("should register member");
            assert_eq!(expected, member.member_id);
        }
    }

    #[tokio::test]
    async fn test_should_list_members_in_registration_order() {
        let roster_svc = factory::create_roster_service(&Configuration::new("test"), RepositoryStore::Ephemeral).await;

        let first = roster_svc.register_member("first member").await.expect("should register member");
        let second = roster_svc.register_member("second member").await.expect("should register member");

        let listed = roster_svc.list_members().await.expect("should list members");
        assert_eq!(vec![first, second], listed);
    }

    #[tokio::test]
    async fn test_should_allow_duplicate_names() {
        let roster_svc = factory::create_roster_service(&Configuration::new("test"), RepositoryStore::Ephemeral).await;

        let first = roster_svc.register_member("same name").await.expect("should register member");
        let second = roster_svc.register_member("same name").await.expect("should register member");
        assert_ne!(first.member_id, second.member_id);
    }

    #[tokio::test]
    async fn test_should_format_registered_member() {
        let roster_svc = factory::create_roster_service(&Configuration::new("test"), RepositoryStore::Ephemeral).await;

        let member = roster_svc.register_member("Blossom Dopamu").await.expect("should register member");
        assert_eq!("Member 1: Blossom Dopamu", member.to_string().as_str());
    }
}
