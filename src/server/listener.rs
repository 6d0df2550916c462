use std::io;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::error::ServerError;
use crate::http::connection::Connection;

/// The bound listening socket and the configuration handed to each worker.
pub struct Listener {
    inner: TcpListener,
    config: Config,
}

impl Listener {
    /// Binds `config.host:config.port`.
    pub async fn bind(config: Config) -> Result<Self, ServerError> {
        let addr = config.listen_addr();
        let inner = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        Ok(Self::from_tcp(inner, config))
    }

    /// Wraps a socket that is already bound, ignoring `config.host` and
    /// `config.port`.
    pub fn from_tcp(inner: TcpListener, config: Config) -> Self {
        Self { inner, config }
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.inner.local_addr()
    }

    /// Accepts connections until the accept call itself fails.
    ///
    /// Every connection gets its own task; the loop never waits on one.
    pub async fn serve(self) -> Result<(), ServerError> {
        match self.local_addr() {
            Ok(addr) => info!("Listening on {}", addr),
            Err(_) => info!("Listening on {}", self.config.listen_addr()),
        }

        loop {
            let (socket, peer) = match self.inner.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!("Server socket shut down unexpectedly: {}", e);
                    return Err(ServerError::Accept(e));
                }
            };
            info!("Accepted connection from {}", peer);

            let config = self.config.clone();
            tokio::spawn(async move {
                Connection::new(socket, peer.to_string(), config).run().await;
                info!("Connection from {} closed", peer);
            });
        }
    }
}

/// Binds according to `config` and serves forever.
pub async fn run(config: Config) -> Result<(), ServerError> {
    Listener::bind(config).await?.serve().await
}
