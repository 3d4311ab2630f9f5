use crate::StorageError;

pub const DEFAULT_DATABASE: &str = "movie_quiz.sqlite";

pub struct StorageConfig {
    pub url: String,
}

impl StorageConfig {
    pub fn from_cli_or_env_or_yaml(cli_arg: Option<String>, yaml_config: Option<String>) -> Self {
        let url = if let Some(arg) = cli_arg {
            arg
        } else if let Ok(env) = std::env::var("MOVIE_QUIZ_DB") {
            env
        } else if let Some(yaml) = yaml_config {
            yaml
        } else {
            DEFAULT_DATABASE.to_string()
        };

        Self { url }
    }

    pub async fn create_pool(&self) -> Result<sqlx::SqlitePool, StorageError> {
        sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(
                sqlx::sqlite::SqliteConnectOptions::new()
                    .filename(&self.url)
                    .create_if_missing(true),
            )
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}
