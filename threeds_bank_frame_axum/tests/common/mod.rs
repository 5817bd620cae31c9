pub mod test_server;

pub use test_server::{TestServer, deliver_configuration, open_frame};
