use crate::backend::VoteBackend;
use crate::config::Config;
use crate::error::{ClientError, VoteError};
use crate::models::{CreateVoteRecord, UserVoteRecord, VoteRecord, VoteResponse};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use url::Url;

/// Talks to the HTTP gateway in front of the vote canister.
///
/// Every canister method is `POST <backend_url>/api/<method>` with the
/// arguments as a JSON array; any path prefix on the backend URL is kept.
/// A successful answer carries the method's `{"Ok": ..}` / `{"Err": ..}`
/// envelope.
pub struct HttpBackend {
    client: Client,
    base_url: Url,
    identity: Option<String>,
}

impl HttpBackend {
    pub fn new(base_url: &str, identity: Option<String>) -> Result<Self, ClientError> {
        Ok(HttpBackend {
            client: Client::new(),
            base_url: api_root(Url::parse(base_url)?),
            identity,
        })
    }

    pub fn from_config(config: &Config) -> Self {
        HttpBackend {
            client: Client::new(),
            base_url: api_root(config.backend_url.clone()),
            identity: config.identity.clone(),
        }
    }

    pub fn method_url(&self, method: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(&format!("api/{}", method))
            .map_err(ClientError::Url)
    }

    async fn send<A>(&self, method: &str, args: &A) -> Result<Value, ClientError>
    where
        A: Serialize + ?Sized,
    {
        let url = self.method_url(method)?;
        debug!("calling {} at {}", method, url);

        let mut request = self.client.post(url).json(args);
        if let Some(token) = &self.identity {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let status = response.status();

        if status.is_success() {
            let result: Value = response.json().await?;
            return Ok(result);
        }

        let error_body = response.text().await?;

        Err(ClientError::Http {
            status: status.as_u16(),
            body: error_body,
        })
    }

    async fn call<A, T>(&self, method: &str, args: &A) -> Result<T, ClientError>
    where
        A: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let value = self.send(method, args).await?;
        decode_envelope(method, value)
    }
}

// Relative joins replace the last path segment unless the path ends in '/'
fn api_root(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

pub(crate) fn decode_envelope<T>(method: &str, value: Value) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    let envelope: Result<T, VoteError> =
        serde_json::from_value(value).map_err(|source| ClientError::Decode {
            method: method.to_string(),
            source,
        })?;
    Ok(envelope?)
}

#[async_trait]
impl VoteBackend for HttpBackend {
    async fn get_vote(&self, hash: &str) -> Result<VoteResponse, ClientError> {
        self.call("getVote", &json!([hash])).await
    }

    async fn vote(&self, hash: &str, index: usize) -> Result<VoteResponse, ClientError> {
        self.call("vote", &json!([hash, index])).await
    }

    async fn get_public_vote(&self) -> Result<Vec<VoteRecord>, ClientError> {
        self.call("getPublicVote", &json!([])).await
    }

    async fn get_my_vote(&self) -> Result<UserVoteRecord, ClientError> {
        self.call("getMyVote", &json!([])).await
    }

    async fn create_vote(&self, request: &CreateVoteRecord) -> Result<VoteRecord, ClientError> {
        self.call("createVote", &json!([request])).await
    }

    async fn whoami(&self) -> Result<String, ClientError> {
        let value = self.send("whoami", &json!([])).await?;
        serde_json::from_value(value).map_err(|source| ClientError::Decode {
            method: "whoami".to_string(),
            source,
        })
    }
}
