use crate::auth::*;
use crate::error::*;
use crate::proto::contacts::ContactsApi;
use crate::proto::webhooks::WebhooksApi;
use crate::request::*;
use http::header::{self, HeaderValue};
use reqwest::Response;
use serde_json::Value;
use smart_default::SmartDefault;
use tracing::*;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.fullcontact.com";

#[derive(SmartDefault)]
pub struct ClientBuilder {
    pub base_url: Option<Url>,
    pub http: Option<reqwest::Client>,
}

impl ClientBuilder {
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        self.base_url = Some(base_url);
        Ok(self)
    }

    /// transport used for every call, timeouts and proxies are configured here
    pub fn with_http_client(mut self, http: reqwest::Client) -> Result<Self> {
        self.http = Some(http);
        Ok(self)
    }

    pub fn build(self) -> Result<Client> {
        let Self { base_url, http } = self;

        let base_url = base_url.ok_or(Error::ClientBuilderMissBaseUrl)?;

        Ok(Client {
            base_url,
            client: http.unwrap_or_default(),
        })
    }
}

/// executes request descriptors against the api host; holds no credentials
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    client: reqwest::Client,
}

impl Client {
    pub fn from_env_file(env: impl AsRef<str>) -> Result<Self> {
        let _ = dotenv::from_filename(env.as_ref());
        Self::from_env()
    }

    pub fn from_default_env() -> Result<Self> {
        let _ = dotenv::dotenv();
        Self::from_env()
    }

    /// reads `FULLCONTACT_API_BASE_URL`, falling back to [`DEFAULT_BASE_URL`]
    pub fn from_env() -> Result<Self> {
        let base_url = match std::env::var("FULLCONTACT_API_BASE_URL") {
            Ok(v) => v,
            Err(std::env::VarError::NotPresent) => DEFAULT_BASE_URL.to_string(),
            Err(e) => return Err(e.into()),
        };
        Self::builder().with_base_url(base_url)?.build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn contacts(&self) -> ContactsApi<'_> {
        ContactsApi::new(self)
    }

    pub fn webhooks(&self) -> WebhooksApi<'_> {
        WebhooksApi::new(self)
    }

    /// send one request authorized with `access_token` and return the parsed reply body
    pub async fn send(&self, access_token: &str, descriptor: RequestDescriptor) -> Result<Value> {
        let rep = self
            .call_impl(&Bearer::new(access_token), descriptor)
            .await?;
        read_response(rep).await
    }

    pub async fn call_impl(
        &self,
        authenticator: &dyn AuthenticatorTrait,
        descriptor: RequestDescriptor,
    ) -> Result<Response> {
        descriptor.validate_path()?;

        let RequestDescriptor {
            method,
            path,
            payload,
        } = descriptor;

        let base_path = self.base_url.path().trim_end_matches('/');
        let url = self.base_url.join(&format!("{}{}", base_path, path))?;
        if url.origin() != self.base_url.origin() {
            return Err(Error::InvalidPath(path));
        }

        debug!(%method, %url, "REQ");

        let mut builder = self.client.request(method, url);

        match payload {
            Payload::Empty => {}
            Payload::Json(body) => {
                for l in serde_json::to_string_pretty(&body)?.lines() {
                    trace!(%l, "REQ");
                }
                builder = builder
                    .header(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
                    .body(serde_json::to_vec(&body)?);
            }
            Payload::Form(parts) => {
                for p in &parts {
                    trace!(name = p.name(), "REQ PART");
                }
                builder = builder.multipart(into_form(parts)?);
            }
        }

        let mut req = builder.build()?;

        authenticator.authorize(&mut req).await?;

        let rep = self.client.execute(req).await?;

        Ok(rep)
    }
}

/// 2xx bodies parse as json, falling back to the raw text; anything else is [`Error::Http`]
async fn read_response(rep: Response) -> Result<Value> {
    let status = rep.status();
    let bytes = rep.bytes().await?;

    if !status.is_success() {
        let body = String::from_utf8_lossy(bytes.as_ref()).into_owned();
        for l in body.lines() {
            error!(%l, "REP");
        }
        return Err(Error::Http {
            status: status.as_u16(),
            body,
        });
    }

    if bytes.is_empty() {
        return Ok(Value::Null);
    }

    let rep = match serde_json::from_slice::<Value>(bytes.as_ref()) {
        Ok(v) => v,
        Err(_) => Value::String(String::from_utf8_lossy(bytes.as_ref()).into_owned()),
    };

    for l in serde_json::to_string_pretty(&rep)?.lines() {
        trace!(%l, "REP");
    }

    Ok(rep)
}
