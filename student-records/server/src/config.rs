use std::{env, fmt::Display, io, str::FromStr};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
}

impl Config {
    /// Reads the configuration from the environment, after loading `.env` if there is one.
    pub fn from_env() -> io::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").map_err(|err| {
            io::Error::new(
                io::ErrorKind::Other,
                format!(
                    "Failed to get DATABASE_URL: {}. Set the URL as an env variable.",
                    err
                ),
            )
        })?;

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", env::var("PORT").ok(), DEFAULT_PORT)?,
            database_url,
            max_connections: parse_or(
                "MAX_CONNECTIONS",
                env::var("MAX_CONNECTIONS").ok(),
                DEFAULT_MAX_CONNECTIONS,
            )?,
        })
    }

    pub fn binding_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn parse_or<T>(name: &str, value: Option<String>, default: T) -> io::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match value {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Failed to parse {name}={value:?}: {err}"),
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{parse_or, Config};

    #[rstest]
    #[case(None, 3000)]
    #[case(Some("8080"), 8080)]
    #[case(Some(" 5000 "), 5000)]
    fn test_parse_or(#[case] value: Option<&str>, #[case] expected: u16) {
        let parsed = parse_or("PORT", value.map(str::to_owned), 3000_u16).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_or_reports_the_variable() {
        let err = parse_or("MAX_CONNECTIONS", Some("lots".to_owned()), 10_u32).unwrap_err();
        assert!(err.to_string().contains("MAX_CONNECTIONS"));
    }

    #[test]
    fn test_binding_address() {
        let config = Config {
            host: "127.0.0.1".to_owned(),
            port: 3000,
            database_url: "postgres://localhost/students".to_owned(),
            max_connections: 10,
        };
        assert_eq!(config.binding_address(), "127.0.0.1:3000");
    }
}
