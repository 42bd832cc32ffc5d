use crate::error::{
    BadEnvVarSnafu, ParseBodyLimitSnafu, ParseFlagSnafu, ParseServerAddrSnafu, RegistryResult,
};
use dotenvy::var;
use snafu::ResultExt;
use std::{env::VarError, net::SocketAddr};

pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfiguration {
    server_addr: SocketAddr,
    body_limit: usize,
    strict_delete: bool,
}

impl Default for RuntimeConfiguration {
    fn default() -> Self {
        Self {
            server_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            body_limit: DEFAULT_BODY_LIMIT,
            strict_delete: false,
        }
    }
}

impl RuntimeConfiguration {
    pub fn new() -> RegistryResult<Self> {
        Self::from_lookup(var)
    }

    /// `lookup` behaves like [`dotenvy::var`], missing variables fall back to defaults.
    pub fn from_lookup(
        lookup: impl Fn(&'static str) -> Result<String, dotenvy::Error>,
    ) -> RegistryResult<Self> {
        let get_env_var = |name: &'static str| -> RegistryResult<Option<String>> {
            match lookup(name) {
                Ok(value) => Ok(Some(value)),
                Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
                Err(source) => Err(source).context(BadEnvVarSnafu { name }),
            }
        };

        let server_addr = get_env_var("STUDENTS_SERVER_IP")?
            .unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());
        let server_addr = server_addr
            .trim()
            .parse::<SocketAddr>()
            .context(ParseServerAddrSnafu {
                original: server_addr.clone(),
            })?;

        let body_limit = match get_env_var("STUDENTS_BODY_LIMIT")? {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .context(ParseBodyLimitSnafu { original: raw.clone() })?,
            None => DEFAULT_BODY_LIMIT,
        };

        let strict_delete = match get_env_var("STUDENTS_STRICT_DELETE")? {
            Some(raw) => raw
                .trim()
                .to_ascii_lowercase()
                .parse::<bool>()
                .context(ParseFlagSnafu {
                    name: "STUDENTS_STRICT_DELETE",
                    original: raw.clone(),
                })?,
            None => false,
        };

        Ok(Self {
            server_addr,
            body_limit,
            strict_delete,
        })
    }

    pub const fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    pub const fn body_limit(&self) -> usize {
        self.body_limit
    }

    /// Whether deleting an unknown id reports 404 instead of quietly succeeding.
    pub const fn strict_delete(&self) -> bool {
        self.strict_delete
    }

    #[cfg(test)]
    pub fn with_strict_delete(mut self, strict_delete: bool) -> Self {
        self.strict_delete = strict_delete;
        self
    }

    #[cfg(test)]
    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;
    use std::collections::HashMap;

    fn lookup_from(
        vars: &[(&'static str, &str)],
    ) -> impl Fn(&'static str) -> Result<String, dotenvy::Error> {
        let vars: HashMap<&'static str, String> = vars
            .iter()
            .map(|(name, value)| (*name, (*value).to_string()))
            .collect();
        move |name| {
            vars.get(name)
                .cloned()
                .ok_or(dotenvy::Error::EnvVar(VarError::NotPresent))
        }
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = RuntimeConfiguration::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, RuntimeConfiguration::default());
        assert_eq!(config.server_addr().port(), 3000);
        assert!(!config.strict_delete());
    }

    #[test]
    fn reads_every_variable() {
        let config = RuntimeConfiguration::from_lookup(lookup_from(&[
            ("STUDENTS_SERVER_IP", "127.0.0.1:8080"),
            ("STUDENTS_BODY_LIMIT", "2048"),
            ("STUDENTS_STRICT_DELETE", "TRUE"),
        ]))
        .unwrap();

        assert_eq!(
            config.server_addr(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(config.body_limit(), 2048);
        assert!(config.strict_delete());
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            RuntimeConfiguration::from_lookup(lookup_from(&[("STUDENTS_SERVER_IP", "localhost")])),
            Err(RegistryError::ParseServerAddr { .. })
        ));
        assert!(matches!(
            RuntimeConfiguration::from_lookup(lookup_from(&[("STUDENTS_BODY_LIMIT", "lots")])),
            Err(RegistryError::ParseBodyLimit { .. })
        ));
        assert!(matches!(
            RuntimeConfiguration::from_lookup(lookup_from(&[("STUDENTS_STRICT_DELETE", "yes")])),
            Err(RegistryError::ParseFlag { .. })
        ));
    }

    #[test]
    fn other_lookup_failures_are_surfaced() {
        let config = RuntimeConfiguration::from_lookup(|_| {
            Err(dotenvy::Error::EnvVar(VarError::NotUnicode("\u{fffd}".into())))
        });

        assert!(matches!(
            config,
            Err(RegistryError::BadEnvVar {
                name: "STUDENTS_SERVER_IP",
                ..
            })
        ));
    }
}
