mod bank_frame;
mod config;
mod error;
mod router;

pub use config::{THREEDS_BANK_FRAME_PATH, bank_frame_url, configuration_url};
pub use error::{IntoJsonError, IntoResponseError};
pub use router::{threeds_bank_frame_router, threeds_bank_frame_router_no_trace};

// Re-export the route prefix and initialization function from threeds_bank_frame crate
pub use threeds_bank_frame::{
    AuthenticationConfiguration, ChannelIdentifier, THREEDS_ROUTE_PREFIX, init,
};
