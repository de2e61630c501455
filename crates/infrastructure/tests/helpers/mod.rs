pub mod builders;
pub mod dns_server_mock;

pub use builders::{example_zone, ZoneBuilder};
pub use dns_server_mock::{MockNsServer, MockXfrServer, NsAnswer, XfrBehavior};
