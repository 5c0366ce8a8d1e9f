pub mod events;
pub mod factory;
pub mod logs;

#[derive(Debug, PartialEq)]
pub(crate) enum GatewayPublisherVia {
    Logs,
}
