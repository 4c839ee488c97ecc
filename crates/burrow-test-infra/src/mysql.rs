use crate::{Result, TestInfraError};
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::ImageExt;
use testcontainers::{ContainerAsync, GenericImage};
use typed_builder::TypedBuilder;

const MYSQL_PORT: u16 = 3306;

/// Settings for a throwaway MySQL server.
#[derive(Debug, Clone, TypedBuilder)]
pub struct MysqlConfig {
    #[builder(default = "8.4".to_string(), setter(into))]
    image_tag: String,
    #[builder(default = "burrow".to_string(), setter(into))]
    database: String,
    #[builder(default = "burrow".to_string(), setter(into))]
    username: String,
    #[builder(default = "burrow".to_string(), setter(into))]
    password: String,
}

impl MysqlConfig {
    /// Rejects settings the official image refuses at boot, which would
    /// otherwise only show up as a wait-for timeout.
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("image_tag", &self.image_tag),
            ("database", &self.database),
            ("username", &self.username),
            ("password", &self.password),
        ] {
            if value.is_empty() {
                return Err(TestInfraError::InvalidConfig(format!("{field} is empty")));
            }
        }

        if self.username == "root" {
            return Err(TestInfraError::InvalidConfig(
                "username must not be root; the root account is configured separately"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

/// A MySQL container that lives as long as this value.
pub struct MySqlServer {
    container: ContainerAsync<GenericImage>,
    config: MysqlConfig,
}

impl MySqlServer {
    /// Starts a container and waits until the server accepts connections.
    pub async fn new(config: MysqlConfig) -> Result<Self> {
        config.validate()?;

        let container = GenericImage::new("mysql", config.image_tag.as_str())
            .with_exposed_port(MYSQL_PORT.tcp())
            .with_wait_for(WaitFor::message_on_stderr("ready for connections"))
            .with_env_var("MYSQL_DATABASE", config.database.as_str())
            .with_env_var("MYSQL_USER", config.username.as_str())
            .with_env_var("MYSQL_PASSWORD", config.password.as_str())
            .with_env_var("MYSQL_ROOT_PASSWORD", "root")
            .start()
            .await?;

        Ok(Self { container, config })
    }

    /// Starts a container with the default settings.
    pub async fn start() -> Result<Self> {
        Self::new(MysqlConfig::builder().build()).await
    }

    /// DSN usable by `sqlx` to reach the container from the host.
    pub async fn database_url(&self) -> Result<String> {
        let host = self.container.get_host().await?;
        let port = self.container.get_host_port_ipv4(MYSQL_PORT).await?;
        Ok(format!(
            "mysql://{}:{}@{}:{}/{}",
            self.config.username, self.config.password, host, port, self.config.database
        ))
    }
}
