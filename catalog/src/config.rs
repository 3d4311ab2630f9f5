pub const DEFAULT_API_URL: &str = "https://tv-api.com/en/API/Top250Movies/k_kiwxbi4y";

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogConfig {
    pub url: String,
}

impl CatalogConfig {
    pub fn from_cli_or_env_or_yaml(cli_arg: Option<String>, yaml_config: Option<String>) -> Self {
        let url = if let Some(arg) = cli_arg {
            arg
        } else if let Ok(env) = std::env::var("MOVIE_QUIZ_API_URL") {
            env
        } else if let Some(yaml) = yaml_config {
            yaml
        } else {
            DEFAULT_API_URL.to_string()
        };

        Self { url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_argument_wins() {
        let config = CatalogConfig::from_cli_or_env_or_yaml(
            Some("http://localhost:8080/movies".to_string()),
            Some("http://yaml/movies".to_string()),
        );
        assert_eq!(config.url, "http://localhost:8080/movies");
    }
}
