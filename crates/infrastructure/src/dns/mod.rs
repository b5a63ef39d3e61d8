pub mod forwarding;
pub mod transport;

pub use forwarding::{MessageBuilder, ResponseParser};
pub use transport::UdpTransport;
