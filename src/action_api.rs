use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use crate::{error::ApiErrorPayload, ApiError};

/// The default user agent
const DEFAULT_USER_AGENT: &str = "Rust Wikibase Action API";

/// The capability set the entity services need from a transport: perform a
/// named read or write action, and supply a CSRF token for writes.
#[async_trait]
pub trait ActionApi {
    /// Performs a GET-style action call, e.g. `wbgetentities`.
    async fn get_action(
        &self,
        action: &str,
        params: HashMap<String, String>,
    ) -> Result<Value, ApiError>;

    /// Performs a POST-style action call, e.g. `wbsetaliases`.
    /// Callers must include a `token` parameter.
    async fn post_action(
        &self,
        action: &str,
        params: HashMap<String, String>,
    ) -> Result<Value, ApiError>;

    /// Returns a CSRF token for write actions.
    async fn get_token(&self) -> Result<String, ApiError>;
}

/// A MediaWiki action API (`api.php`) client.
#[derive(Debug, Clone)]
pub struct MediawikiApi {
    client: reqwest::Client,
    user_agent: String,
    api_url: String,
    tokens: Arc<RwLock<HashMap<String, String>>>,
}

impl MediawikiApi {
    /// Returns an empty `MediawikiApiBuilder`
    pub fn builder() -> MediawikiApiBuilder {
        MediawikiApiBuilder::default()
    }

    fn request_builder(
        &self,
        params: &HashMap<String, String>,
        method: reqwest::Method,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let headers = self.headers()?;
        Ok(match method {
            reqwest::Method::GET => self.client.get(&self.api_url).headers(headers).query(params),
            reqwest::Method::POST => self.client.post(&self.api_url).headers(headers).form(params),
            _ => return Err(ApiError::UnsupportedMethod(method)),
        })
    }

    fn headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(reqwest::header::USER_AGENT, self.user_agent.parse()?);
        headers.insert(reqwest::header::ACCEPT, "application/json".parse()?);
        Ok(headers)
    }

    /// Runs one action call: adds the `action` and `format` parameters,
    /// executes the request, and surfaces an API error body as an error.
    async fn execute_action(
        &self,
        action: &str,
        mut params: HashMap<String, String>,
        method: reqwest::Method,
    ) -> Result<Value, ApiError> {
        params.insert("action".to_string(), action.to_string());
        params.insert("format".to_string(), "json".to_string());
        let request = self.request_builder(&params, method)?.build()?;
        let response = self.client.execute(request).await?;
        if !response.status().is_success() {
            return Err(ApiError::from_response(&response));
        }
        let j: Value = response.json().await?;
        Self::check_for_api_error(j)
    }

    /// The action API reports failures inside an HTTP 200 response body.
    fn check_for_api_error(j: Value) -> Result<Value, ApiError> {
        match j.get("error") {
            Some(error) => {
                let payload: ApiErrorPayload =
                    serde_json::from_value(error.to_owned()).unwrap_or_default();
                Err(ApiError::Api { payload })
            }
            None => Ok(j),
        }
    }

    /// Drops all cached tokens, forcing a fresh fetch on the next write.
    pub async fn clear_tokens(&self) {
        self.tokens.write().await.clear();
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl ActionApi for MediawikiApi {
    async fn get_action(
        &self,
        action: &str,
        params: HashMap<String, String>,
    ) -> Result<Value, ApiError> {
        self.execute_action(action, params, reqwest::Method::GET)
            .await
    }

    async fn post_action(
        &self,
        action: &str,
        params: HashMap<String, String>,
    ) -> Result<Value, ApiError> {
        self.execute_action(action, params, reqwest::Method::POST)
            .await
    }

    async fn get_token(&self) -> Result<String, ApiError> {
        if let Some(token) = self.tokens.read().await.get("csrf") {
            return Ok(token.to_owned());
        }
        let params = [("meta", "tokens"), ("type", "csrf")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let j = self.get_action("query", params).await?;
        let token = j["query"]["tokens"]["csrftoken"]
            .as_str()
            .ok_or_else(|| ApiError::MissingOrInvalidField {
                field: "csrftoken".to_string(),
                j: j.to_owned(),
            })?
            .to_string();
        self.tokens
            .write()
            .await
            .insert("csrf".to_string(), token.to_owned());
        Ok(token)
    }
}

#[derive(Debug, Default)]
pub struct MediawikiApiBuilder {
    client: reqwest::Client,
    user_agent: Option<String>,
    api_url: Option<String>,
}

impl MediawikiApiBuilder {
    /// Sets the action API URL, specifically the URL ending in "api.php". This is mandatory.
    pub fn api<S: Into<String>>(mut self, api_url: S) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Sets the user agent. By default, the user agent is "Rust Wikibase Action API; {`package_name`}/{`package_version`}"
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the `reqwest::Client`. By default, a new `reqwest::Client` is created.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn validate_api_url(&self) -> Result<String, ApiError> {
        let api_url = match &self.api_url {
            Some(api_url) => api_url.to_owned(),
            None => return Err(ApiError::ApiNotSet),
        };
        let (base, _rest) = api_url
            .split_once("/api.php")
            .ok_or_else(|| ApiError::ApiUrlInvalid(api_url.to_owned()))?;
        Ok(format!("{base}/api.php"))
    }

    /// Builds the `MediawikiApi`.
    /// # Errors
    /// Returns an error if no valid action API URL is set.
    pub fn build(&self) -> Result<MediawikiApi, ApiError> {
        let api_url = self.validate_api_url()?;
        Ok(MediawikiApi {
            client: self.client.clone(),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or(Self::default_user_agent()),
            api_url,
            tokens: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    /// Returns the default user agent, a versioned string based on `DEFAULT_USER_AGENT`.
    fn default_user_agent() -> String {
        format!(
            "{DEFAULT_USER_AGENT}; {}/{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )
    }
}
