use crate::{client::Client, error::*, proto::Scope, request::RequestDescriptor};
use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebhooksEndpoint {
    Get,
    Search,
    Create,
    GetTriggers,
    Delete,
    GetBatches,
}

impl WebhooksEndpoint {
    pub const ALL: [WebhooksEndpoint; 6] = [
        WebhooksEndpoint::Get,
        WebhooksEndpoint::Search,
        WebhooksEndpoint::Create,
        WebhooksEndpoint::GetTriggers,
        WebhooksEndpoint::Delete,
        WebhooksEndpoint::GetBatches,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            WebhooksEndpoint::Get => "/v3/webhooks.get",
            WebhooksEndpoint::Search => "/v3/webhooks.search",
            WebhooksEndpoint::Create => "/v3/webhooks.create",
            WebhooksEndpoint::GetTriggers => "/v3/webhooks.getTriggers",
            WebhooksEndpoint::Delete => "/v3/webhooks.delete",
            WebhooksEndpoint::GetBatches => "/v3/webhooks.getBatches",
        }
    }

    pub fn scope(&self) -> Scope {
        match self {
            WebhooksEndpoint::Create | WebhooksEndpoint::Delete => Scope::WebhooksWrite,
            _ => Scope::WebhooksRead,
        }
    }

    pub fn descriptor<B>(&self, body: &B) -> Result<RequestDescriptor>
    where
        B: Serialize + ?Sized,
    {
        RequestDescriptor::post_json(self.path(), body)
    }
}

/// Webhooks api, `/v3/webhooks.*`.
#[derive(Debug, Clone, Copy)]
pub struct WebhooksApi<'c> {
    client: &'c Client,
}

impl<'c> WebhooksApi<'c> {
    pub fn new(client: &'c Client) -> Self {
        Self { client }
    }

    async fn call<B>(&self, endpoint: WebhooksEndpoint, access_token: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.client
            .send(access_token, endpoint.descriptor(body)?)
            .await
    }

    pub async fn get<B: Serialize + ?Sized>(&self, access_token: &str, body: &B) -> Result<Value> {
        self.call(WebhooksEndpoint::Get, access_token, body).await
    }

    pub async fn search<B: Serialize + ?Sized>(&self, access_token: &str, body: &B) -> Result<Value> {
        self.call(WebhooksEndpoint::Search, access_token, body).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, access_token: &str, body: &B) -> Result<Value> {
        self.call(WebhooksEndpoint::Create, access_token, body).await
    }

    pub async fn get_triggers<B: Serialize + ?Sized>(
        &self,
        access_token: &str,
        body: &B,
    ) -> Result<Value> {
        self.call(WebhooksEndpoint::GetTriggers, access_token, body).await
    }

    pub async fn delete<B: Serialize + ?Sized>(&self, access_token: &str, body: &B) -> Result<Value> {
        self.call(WebhooksEndpoint::Delete, access_token, body).await
    }

    pub async fn get_batches<B: Serialize + ?Sized>(
        &self,
        access_token: &str,
        body: &B,
    ) -> Result<Value> {
        self.call(WebhooksEndpoint::GetBatches, access_token, body).await
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookCreateRequest {
    pub trigger_ids: Vec<String>,
    pub url: String,
}

impl WebhookCreateRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            trigger_ids: vec![],
            url: url.into(),
        }
    }

    pub fn add_trigger(mut self, trigger_id: impl Into<String>) -> Self {
        self.trigger_ids.push(trigger_id.into());
        self
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookBatchesRequest {
    pub webhook_id: String,
    pub batch_id: Option<String>,
}

impl WebhookBatchesRequest {
    pub fn new(webhook_id: impl Into<String>) -> Self {
        Self {
            webhook_id: webhook_id.into(),
            batch_id: None,
        }
    }

    pub fn with_batch_id(mut self, batch_id: impl Into<String>) -> Self {
        self.batch_id = Some(batch_id.into());
        self
    }
}
