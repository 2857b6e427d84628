/// contacts endpoints
pub mod contacts;

/// webhooks endpoints
pub mod webhooks;

/// oauth scope the remote api checks before honoring a call.
/// informational only, tokens are never inspected client side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Scope {
    #[serde(rename = "contacts.read")]
    ContactsRead,
    #[serde(rename = "contacts.write")]
    ContactsWrite,
    #[serde(rename = "webhooks.read")]
    WebhooksRead,
    #[serde(rename = "webhooks.write")]
    WebhooksWrite,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::ContactsRead => "contacts.read",
            Scope::ContactsWrite => "contacts.write",
            Scope::WebhooksRead => "webhooks.read",
            Scope::WebhooksWrite => "webhooks.write",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Scope> for String {
    fn from(value: Scope) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
#[test]
fn test_scope_names_match_serde() -> anyhow::Result<()> {
    for s in [
        Scope::ContactsRead,
        Scope::ContactsWrite,
        Scope::WebhooksRead,
        Scope::WebhooksWrite,
    ] {
        assert_eq!(serde_json::to_value(s)?, serde_json::json!(s.as_str()));
        assert_eq!(String::from(s), s.to_string());
    }
    Ok(())
}
