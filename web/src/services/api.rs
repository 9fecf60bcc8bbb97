use anyhow::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client, Method, Response,
};
use url::Url;

pub async fn call_api<R: for<'de> serde::de::Deserialize<'de>, B: serde::Serialize>(
    method: Method,
    base_url: &Url,
    path: &str,
    body: Option<B>,
) -> Result<R> {
    let response = send_api_request(method, base_url, path, body).await?;

    Ok(response.json().await?)
}

/// Mutation responses are discarded, only the status is checked.
pub async fn call_api_no_content<B: serde::Serialize>(
    method: Method,
    base_url: &Url,
    path: &str,
    body: Option<B>,
) -> Result<()> {
    send_api_request(method, base_url, path, body).await?;

    Ok(())
}

async fn send_api_request<B: serde::Serialize>(
    method: Method,
    base_url: &Url,
    path: &str,
    body: Option<B>,
) -> Result<Response> {
    let mut request = API_CLIENT.request(method, base_url.join(path)?);

    if let Some(body) = body {
        request = request
            .header("content-type", "application/json")
            .json(&body);
    }

    let response = request.send().await?;

    Ok(response.error_for_status()?)
}

lazy_static! {
    pub static ref API_CLIENT: Client = reqwest::ClientBuilder::new()
        .default_headers({
            let mut headers = HeaderMap::new();
            headers.insert("Accept", HeaderValue::from_static("application/json"));
            headers
        })
        .build()
        .unwrap();
}
