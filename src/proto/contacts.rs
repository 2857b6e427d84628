use crate::{client::Client, error::*, proto::Scope, request::*};
use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;
use std::path::Path;
use tracing::*;

pub const PHOTO_CONTACT_PART: &str = "contact.json";
pub const PHOTO_FILE_PART: &str = "file3";
pub const PHOTO_FILE_NAME: &str = "image.png";
pub const PHOTO_CONTENT_TYPE: &str = "image/png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactsEndpoint {
    Get,
    Scroll,
    Search,
    Create,
    Update,
    ManageTags,
    UploadPhoto,
    Delete,
}

impl ContactsEndpoint {
    pub const ALL: [ContactsEndpoint; 8] = [
        ContactsEndpoint::Get,
        ContactsEndpoint::Scroll,
        ContactsEndpoint::Search,
        ContactsEndpoint::Create,
        ContactsEndpoint::Update,
        ContactsEndpoint::ManageTags,
        ContactsEndpoint::UploadPhoto,
        ContactsEndpoint::Delete,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            ContactsEndpoint::Get => "/api/v1/contacts.get",
            ContactsEndpoint::Scroll => "/api/v1/contacts.scroll",
            ContactsEndpoint::Search => "/api/v1/contacts.search",
            ContactsEndpoint::Create => "/api/v1/contacts.create",
            ContactsEndpoint::Update => "/api/v1/contacts.update",
            ContactsEndpoint::ManageTags => "/api/v1/contacts.manageTags",
            ContactsEndpoint::UploadPhoto => "/api/v1/contacts.uploadPhoto",
            ContactsEndpoint::Delete => "/api/v1/contacts.delete",
        }
    }

    pub fn scope(&self) -> Scope {
        match self {
            ContactsEndpoint::Get | ContactsEndpoint::Scroll | ContactsEndpoint::Search => {
                Scope::ContactsRead
            }
            _ => Scope::ContactsWrite,
        }
    }

    pub fn descriptor<B>(&self, body: &B) -> Result<RequestDescriptor>
    where
        B: Serialize + ?Sized,
    {
        RequestDescriptor::post_json(self.path(), body)
    }
}

/// multipart body of `contacts.uploadPhoto`: the contact as json plus the png bytes
pub fn upload_photo_descriptor<C>(contact: &C, data: impl Into<Vec<u8>>) -> Result<RequestDescriptor>
where
    C: Serialize + ?Sized,
{
    Ok(RequestDescriptor::post_form(
        ContactsEndpoint::UploadPhoto.path(),
        vec![
            FormPart::json(PHOTO_CONTACT_PART, contact)?,
            FormPart::binary(PHOTO_FILE_PART, PHOTO_FILE_NAME, PHOTO_CONTENT_TYPE, data),
        ],
    ))
}

/// Contacts api, `/api/v1/contacts.*`.
///
/// Read methods need the `contacts.read` scope, the rest `contacts.write`.
/// Scopes are checked by the server only.
#[derive(Debug, Clone, Copy)]
pub struct ContactsApi<'c> {
    client: &'c Client,
}

impl<'c> ContactsApi<'c> {
    pub fn new(client: &'c Client) -> Self {
        Self { client }
    }

    async fn call<B>(&self, endpoint: ContactsEndpoint, access_token: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.client
            .send(access_token, endpoint.descriptor(body)?)
            .await
    }

    pub async fn get<B: Serialize + ?Sized>(&self, access_token: &str, body: &B) -> Result<Value> {
        self.call(ContactsEndpoint::Get, access_token, body).await
    }

    /// pass `scrollCursor` from the previous reply to continue, see [`ContactScrollRequest`]
    pub async fn scroll<B: Serialize + ?Sized>(&self, access_token: &str, body: &B) -> Result<Value> {
        self.call(ContactsEndpoint::Scroll, access_token, body).await
    }

    pub async fn search<B: Serialize + ?Sized>(&self, access_token: &str, body: &B) -> Result<Value> {
        self.call(ContactsEndpoint::Search, access_token, body).await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, access_token: &str, body: &B) -> Result<Value> {
        self.call(ContactsEndpoint::Create, access_token, body).await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, access_token: &str, body: &B) -> Result<Value> {
        self.call(ContactsEndpoint::Update, access_token, body).await
    }

    pub async fn manage_tags<B: Serialize + ?Sized>(
        &self,
        access_token: &str,
        body: &B,
    ) -> Result<Value> {
        self.call(ContactsEndpoint::ManageTags, access_token, body).await
    }

    pub async fn upload_photo<C: Serialize + ?Sized>(
        &self,
        access_token: &str,
        contact: &C,
        data: impl Into<Vec<u8>>,
    ) -> Result<Value> {
        let descriptor = upload_photo_descriptor(contact, data)?;
        self.client.send(access_token, descriptor).await
    }

    pub async fn upload_photo_file<C: Serialize + ?Sized>(
        &self,
        access_token: &str,
        contact: &C,
        path: impl AsRef<Path>,
    ) -> Result<Value> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        trace!(path = %path.display(), bytes = data.len(), "upload photo");
        self.upload_photo(access_token, contact, data).await
    }

    /// body carries the ids to remove, e.g. `{"contactId": ..., "etag": ...}`
    pub async fn delete<B: Serialize + ?Sized>(&self, access_token: &str, body: &B) -> Result<Value> {
        self.call(ContactsEndpoint::Delete, access_token, body).await
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactScrollRequest {
    pub scroll_cursor: Option<String>,
    pub size: Option<u32>,
}

impl ContactScrollRequest {
    pub fn with_scroll_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.scroll_cursor = Some(cursor.into());
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}
