use anyhow::{Context, Result};
use url::Url;

// Fixed at build time. Override with the API_BASE_URL environment variable
// when compiling; there is no runtime configuration surface.
const DEFAULT_API_BASE_URL: &str = "https://localhost:7025/api/";

pub fn get_api_base_url() -> Result<Url> {
    let base_url = option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL);
    Url::parse(base_url).with_context(|| format!("Failed to parse API base URL `{base_url}`"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_api_base_url_joins_task_paths() {
        let base_url = get_api_base_url().unwrap();

        assert_eq!(base_url.join("tasks").unwrap().path(), "/api/tasks");
        assert_eq!(
            base_url.join("tasks/42").unwrap().path(),
            "/api/tasks/42"
        );
    }
}
