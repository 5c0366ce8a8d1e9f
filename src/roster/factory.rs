use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;
use crate::members::factory;
use crate::roster::domain::RosterService;
use crate::roster::domain::service::RosterServiceImpl;

pub(crate) async fn create_roster_service(config: &Configuration, store: RepositoryStore) -> Box<dyn RosterService> {
    let member_repo = factory::create_member_repository(store).await;
    let publisher = create_publisher(store.gateway_publisher()).await;
    Box::new(RosterServiceImpl::new(config, member_repo, publisher))
}
