use tokio_postgres::{Client, Config, NoTls};
use url::Url;

use crate::{Error, Result};

/// Opens one PostgreSQL connection per gateway operation.
///
/// The gateway never holds a connection across two operations: every
/// operation asks the connector for a fresh client and drops it on
/// every exit path, which also ends the spawned connection task.
#[derive(Debug, Clone)]
pub struct Connector {
    config: Config,
}

impl Connector {
    /// Creates a connector from a `postgresql://` connection URL.
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(Error::connection)?;

        if url.scheme() != "postgresql" && url.scheme() != "postgres" {
            return Err(Error::connection(anyhow::anyhow!(
                "connection URL does not have a `postgresql` scheme; url={url}"
            )));
        }

        let host = url.host_str().filter(|host| !host.is_empty()).ok_or_else(|| {
            Error::connection(anyhow::anyhow!(
                "missing host in connection URL; url={url}"
            ))
        })?;

        if url.path().is_empty() {
            return Err(Error::connection(anyhow::anyhow!(
                "no database specified - missing path in connection URL; url={url}"
            )));
        }

        let mut config = Config::new();
        config.host(host);
        config.dbname(url.path().trim_start_matches('/'));

        if let Some(port) = url.port() {
            config.port(port);
        }

        if !url.username().is_empty() {
            config.user(url.username());
        }

        if let Some(password) = url.password() {
            config.password(password);
        }

        Ok(Self { config })
    }

    /// Creates a connector from the `DATABASE_URL` environment
    /// variable.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("DATABASE_URL")
            .map_err(|_| Error::connection(anyhow::anyhow!("DATABASE_URL is not set")))?;

        Self::new(&url)
    }

    /// Opens a fresh connection. The connection task runs until the
    /// returned client is dropped.
    pub(crate) async fn connect(&self) -> Result<Client> {
        let (client, connection) = self
            .config
            .connect(NoTls)
            .await
            .map_err(Error::connection)?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::warn!("connection error: {e}");
            }
        });

        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_postgresql_urls() {
        assert!(Connector::new("postgresql://user:pw@localhost:5432/analytics").is_ok());
        assert!(Connector::new("postgres://localhost/analytics").is_ok());
    }

    #[test]
    fn rejects_other_schemes() {
        let err = Connector::new("mysql://localhost/analytics").unwrap_err();
        assert!(err.is_connection());
        assert!(err.to_string().contains("scheme"));
    }

    #[test]
    fn rejects_missing_host() {
        assert!(Connector::new("postgresql:///analytics").is_err());
    }

    #[test]
    fn rejects_missing_database() {
        let err = Connector::new("postgresql://localhost").unwrap_err();
        assert!(err.to_string().contains("no database specified"));
    }
}
