use crate::error::*;
use async_trait::async_trait;
use http::header::{self, HeaderValue};
use reqwest::Request;
use tracing::*;

#[async_trait]
pub trait AuthenticatorTrait: Send + Sync {
    async fn authorize(&self, req: &mut Request) -> Result<()>;
}

/// bearer credential for a single call, never cached by the client
#[derive(Clone)]
pub struct Bearer {
    key: String,
}

impl Bearer {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl std::fmt::Debug for Bearer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bearer").field("key", &"***").finish()
    }
}

#[async_trait]
impl AuthenticatorTrait for Bearer {
    async fn authorize(&self, req: &mut Request) -> Result<()> {
        if self.key.is_empty() {
            return Err(Error::EmptyAccessToken);
        }
        let k = header::AUTHORIZATION;
        let mut v = HeaderValue::from_str(&format!("Bearer {}", self.key))?;
        v.set_sensitive(true);
        if req.headers_mut().insert(k, v).is_some() {
            warn!("auth header exists and overwroted");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> anyhow::Result<Request> {
        Ok(Request::new(
            http::Method::POST,
            url::Url::parse("https://api.fullcontact.com/v3/webhooks.get")?,
        ))
    }

    #[tokio::test]
    async fn test_bearer_sets_header_ok() -> anyhow::Result<()> {
        let mut req = request()?;
        Bearer::new("abc").authorize(&mut req).await?;
        let v = req.headers().get(header::AUTHORIZATION).map(|v| v.to_str());
        assert_eq!(v.transpose()?, Some("Bearer abc"));
        Ok(())
    }

    #[tokio::test]
    async fn test_bearer_overwrites_existing_header() -> anyhow::Result<()> {
        let mut req = request()?;
        Bearer::new("first").authorize(&mut req).await?;
        Bearer::new("second").authorize(&mut req).await?;
        let all: Vec<_> = req.headers().get_all(header::AUTHORIZATION).iter().collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].to_str()?, "Bearer second");
        Ok(())
    }

    #[tokio::test]
    async fn test_bearer_empty_key_rejected() -> anyhow::Result<()> {
        let mut req = request()?;
        let err = Bearer::new("").authorize(&mut req).await.unwrap_err();
        assert!(matches!(err, Error::EmptyAccessToken));
        assert!(req.headers().get(header::AUTHORIZATION).is_none());
        Ok(())
    }

    #[test]
    fn test_bearer_debug_hides_key() {
        let s = format!("{:?}", Bearer::new("secret-token"));
        assert!(!s.contains("secret-token"));
    }
}
