//! HTTP server configuration object.

use std::net::SocketAddr;

use news_backend::inbound::http::state::HttpState;

/// Everything the HTTP server needs once the adapters are built.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) http_state: HttpState,
}

impl ServerConfig {
    /// Construct a server configuration.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, http_state: HttpState) -> Self {
        Self {
            bind_addr,
            http_state,
        }
    }
}
