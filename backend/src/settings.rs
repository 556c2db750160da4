//! Database settings loaded via OrthoConfig.
//!
//! Values come from `DB_USER`, `DB_NAME`, `DB_PASSWORD`, `DB_HOST` and
//! `DB_PORT` (or the matching `--user`, `--name`, ... flags). Credentials are
//! optional and left out of the connection string when absent; the host and
//! port fall back to `localhost:5432`.

use std::fmt;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;

/// Connection settings for the relational store.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DB")]
pub struct DatabaseSettings {
    /// Role used to authenticate.
    pub user: Option<String>,
    /// Database name.
    pub name: Option<String>,
    /// Password for `user`.
    pub password: Option<String>,
    /// Server host name or address.
    #[ortho_config(default = "localhost".to_owned())]
    pub host: String,
    /// Server port.
    #[ortho_config(default = 5432)]
    pub port: u16,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            user: None,
            name: None,
            password: None,
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
        }
    }
}

impl DatabaseSettings {
    /// Build a key/value connection string with TLS disabled.
    ///
    /// Values are single-quoted with backslash escapes so passwords may
    /// contain spaces and quotes.
    ///
    /// # Examples
    /// ```
    /// use bookshelf::settings::DatabaseSettings;
    ///
    /// let settings = DatabaseSettings {
    ///     user: Some("books".into()),
    ///     name: Some("library".into()),
    ///     ..DatabaseSettings::default()
    /// };
    /// assert_eq!(
    ///     settings.connection_string(),
    ///     "user='books' dbname='library' host='localhost' port=5432 sslmode=disable"
    /// );
    /// ```
    pub fn connection_string(&self) -> String {
        let mut parts = Vec::with_capacity(6);
        if let Some(user) = &self.user {
            parts.push(format!("user={}", quote(user)));
        }
        if let Some(name) = &self.name {
            parts.push(format!("dbname={}", quote(name)));
        }
        if let Some(password) = &self.password {
            parts.push(format!("password={}", quote(password)));
        }
        parts.push(format!("host={}", quote(&self.host)));
        parts.push(format!("port={}", self.port));
        parts.push("sslmode=disable".to_owned());
        parts.join(" ")
    }

    /// Loggable description of the target database without credentials.
    pub fn target(&self) -> String {
        format!(
            "{}:{}/{}",
            self.host,
            self.port,
            self.name.as_deref().unwrap_or_default()
        )
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("user", &self.user)
            .field("name", &self.name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}
