use crate::error::*;
use http::Method;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// in-memory form of a single api call, consumed by [`crate::client::Client::send`]
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub payload: Payload,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            payload: Payload::Empty,
        }
    }

    /// `POST` with `body` serialized up front, so a bad body never reaches the network
    pub fn post_json<B>(path: impl Into<String>, body: &B) -> Result<Self>
    where
        B: Serialize + ?Sized,
    {
        Ok(Self::new(Method::POST, path).with_payload(Payload::Json(serde_json::to_value(body)?)))
    }

    pub fn post_form(path: impl Into<String>, parts: Vec<FormPart>) -> Self {
        Self::new(Method::POST, path).with_payload(Payload::Form(parts))
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// path must be relative to the api host: one leading `/`, no scheme, no
    /// backslash, query, fragment or whitespace
    pub fn validate_path(&self) -> Result<()> {
        let p = self.path.as_str();
        let ok = p.starts_with('/')
            && !p.starts_with("//")
            && !p.contains("://")
            && !p
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '\\' | '?' | '#'));
        if ok {
            Ok(())
        } else {
            Err(Error::InvalidPath(self.path.clone()))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Empty,
    Json(Value),
    Form(Vec<FormPart>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    /// text part holding serialized json, sent as `application/json`
    Json { name: String, value: Value },
    Binary {
        name: String,
        file_name: String,
        content_type: String,
        data: Vec<u8>,
    },
}

impl FormPart {
    pub fn json<B>(name: impl Into<String>, value: &B) -> Result<Self>
    where
        B: Serialize + ?Sized,
    {
        Ok(Self::Json {
            name: name.into(),
            value: serde_json::to_value(value)?,
        })
    }

    pub fn binary(
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        Self::Binary {
            name: name.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FormPart::Json { name, .. } | FormPart::Binary { name, .. } => name,
        }
    }

    fn into_part(self) -> Result<(String, Part)> {
        match self {
            FormPart::Json { name, value } => {
                let part = Part::text(serde_json::to_string(&value)?)
                    .mime_str(JSON_CONTENT_TYPE)
                    .map_err(|e| Error::FormPart(format!("{name}: {e}")))?;
                Ok((name, part))
            }
            FormPart::Binary {
                name,
                file_name,
                content_type,
                data,
            } => {
                let part = Part::bytes(data)
                    .file_name(file_name)
                    .mime_str(&content_type)
                    .map_err(|e| Error::FormPart(format!("{name}: {e}")))?;
                Ok((name, part))
            }
        }
    }
}

pub(crate) fn into_form(parts: Vec<FormPart>) -> Result<Form> {
    let mut form = Form::new();
    for part in parts {
        let (name, part) = part.into_part()?;
        form = form.part(name, part);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_post_json_keeps_body() -> anyhow::Result<()> {
        let body = json!({"contactIds": ["a", "b"]});
        let d = RequestDescriptor::post_json("/api/v1/contacts.get", &body)?;
        assert_eq!(d.method, Method::POST);
        assert_eq!(d.path, "/api/v1/contacts.get");
        assert_eq!(d.payload, Payload::Json(body));
        Ok(())
    }

    #[test]
    fn test_post_json_unserializable_body() {
        let mut body = HashMap::new();
        body.insert((1, 2), "tuple keys are not json");
        let err = RequestDescriptor::post_json("/v3/webhooks.get", &body).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_validate_path() {
        let good = ["/api/v1/contacts.get", "/v3/webhooks.getBatches"];
        for p in good {
            assert!(RequestDescriptor::new(Method::POST, p).validate_path().is_ok(), "{p}");
        }

        let bad = [
            "",
            "contacts.get",
            "//evil.example.com/x",
            "https://evil.example.com/v3/webhooks.get",
            "/v3/webhooks get",
            "/\\evil.example.com/x",
            "/v3/webhooks.get\\..\\x",
            "/v3/webhooks.get?x=1",
            "/v3/webhooks.get#frag",
        ];
        for p in bad {
            let err = RequestDescriptor::new(Method::POST, p).validate_path().unwrap_err();
            assert!(matches!(err, Error::InvalidPath(ref s) if s == p), "{p}");
        }
    }

    #[test]
    fn test_form_part_names() -> anyhow::Result<()> {
        let j = FormPart::json("contact.json", &json!({"id": "1"}))?;
        let b = FormPart::binary("file3", "image.png", "image/png", vec![1u8, 2, 3]);
        assert_eq!(j.name(), "contact.json");
        assert_eq!(b.name(), "file3");
        Ok(())
    }

    #[test]
    fn test_into_form_rejects_bad_content_type() {
        let parts = vec![FormPart::binary("file3", "image.png", "not a mime", vec![0u8])];
        let err = into_form(parts).unwrap_err();
        assert!(matches!(err, Error::FormPart(ref m) if m.starts_with("file3")));
    }

    #[test]
    fn test_into_form_ok() -> anyhow::Result<()> {
        let parts = vec![
            FormPart::json("contact.json", &json!({"id": "1"}))?,
            FormPart::binary("file3", "image.png", "image/png", b"png".to_vec()),
        ];
        let form = into_form(parts)?;
        assert!(!form.boundary().is_empty());
        Ok(())
    }
}
