pub mod client;
pub mod message_builder;
pub mod zone_collector;

pub use client::HickoryZoneTransferClient;
pub use message_builder::MessageBuilder;
pub use zone_collector::ZoneCollector;
