//! Backend selection from a database URL

use super::StoreError;

/// Which backend a `DATABASE_URL` points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreUrl {
    /// Process-local store, lost on exit
    Memory,
    /// SQLite file or `sqlite::memory:`
    Sqlite(String),
    /// PostgreSQL server
    Postgres(String),
}

impl StoreUrl {
    /// Classify a database URL by scheme.
    ///
    /// # Example
    /// ```
    /// use margem_server::StoreUrl;
    ///
    /// assert_eq!(StoreUrl::parse("memory").unwrap(), StoreUrl::Memory);
    /// assert!(matches!(StoreUrl::parse("sqlite::memory:"), Ok(StoreUrl::Sqlite(_))));
    /// assert!(matches!(StoreUrl::parse("postgres://localhost/vendas"), Ok(StoreUrl::Postgres(_))));
    /// assert!(StoreUrl::parse("mysql://localhost/vendas").is_err());
    /// ```
    pub fn parse(url: &str) -> Result<Self, StoreError> {
        let url = url.trim();

        if url == "memory" || url.starts_with("memory://") {
            Ok(Self::Memory)
        } else if url.starts_with("sqlite:") {
            Ok(Self::Sqlite(url.to_owned()))
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Self::Postgres(url.to_owned()))
        } else {
            Err(StoreError::UnsupportedUrl(redact(url)))
        }
    }

    /// Backend name without any credentials, safe to log.
    pub fn backend(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Sqlite(_) => "sqlite",
            Self::Postgres(_) => "postgres",
        }
    }

    /// True when the data will not survive a restart.
    pub fn is_ephemeral(&self) -> bool {
        match self {
            Self::Memory => true,
            Self::Sqlite(url) => is_sqlite_memory(url),
            Self::Postgres(_) => false,
        }
    }
}

/// `sqlite::memory:` and `mode=memory` URLs live only as long as their connection.
pub(crate) fn is_sqlite_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Drop the userinfo part so passwords never end up in error messages.
fn redact(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_owned(),
    }
}
