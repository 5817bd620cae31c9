mod errors;
mod memory;
mod types;

use std::sync::LazyLock;

pub use errors::BusError;
pub use memory::InMemoryMessageBus;
pub use types::{BusEvent, ConfigurationCallback, MessageBus, RequestId};

/// Process-wide bus shared by frame pages and parent-controller responses.
pub static MESSAGE_BUS: LazyLock<InMemoryMessageBus> = LazyLock::new(InMemoryMessageBus::new);
