//! CUBA REST API v2 metadata client.
//!
//! Authenticates with the platform's OAuth2 password grant, then serves
//! the generator through the `MetadataSource` trait. The v2 list endpoints
//! return everything; prefix filtering happens client-side.

use cuba_codegen_lib::{CodegenError, MetadataSource};
use cuba_metadata::{EntityType, EnumType};
use serde::Deserialize;
use tracing::debug;

/// Client-side errors, mapped to `CodegenError::Source` at the trait seam.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("token request failed: {0}")]
    Token(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Connected metadata client. Holds the bearer token for the session.
pub struct CubaClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    access_token: String,
}

impl CubaClient {
    /// Connect to `<endpoint>/v2`, exchanging REST client credentials plus
    /// user credentials for an access token.
    pub fn connect(
        endpoint: &str,
        client_id: &str,
        client_secret: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, ClientError> {
        let endpoint = endpoint.trim_end_matches('/').to_string();
        let http = reqwest::blocking::Client::new();

        let url = format!("{}/v2/oauth/token", endpoint);
        debug!(url = %url, username = %username, "requesting access token");
        let resp = http
            .post(&url)
            .basic_auth(client_id, Some(client_secret))
            .form(&[
                ("grant_type", "password"),
                ("username", username),
                ("password", password),
            ])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(ClientError::Token(format!("{}: {}", status, body)));
        }

        let token: TokenResponse = resp.json()?;
        Ok(Self {
            http,
            endpoint,
            access_token: token.access_token,
        })
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}/v2{}", self.endpoint, path);
        debug!(url = %url, "fetching metadata");
        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status { status, url });
        }
        Ok(resp.json()?)
    }
}

/// Keep entities whose raw metaclass name starts with `prefix`.
fn filter_entities(entities: Vec<EntityType>, prefix: &str) -> Vec<EntityType> {
    entities
        .into_iter()
        .filter(|e| e.entity_name.starts_with(prefix))
        .collect()
}

/// Keep enums whose dotted name starts with `prefix`. Empty matches all.
fn filter_enums(enums: Vec<EnumType>, prefix: &str) -> Vec<EnumType> {
    enums
        .into_iter()
        .filter(|e| e.name.starts_with(prefix))
        .collect()
}

impl MetadataSource for CubaClient {
    fn list_entity_types(&self, prefix: &str) -> Result<Vec<EntityType>, CodegenError> {
        let all: Vec<EntityType> = self
            .get_json("/metadata/entities")
            .map_err(|e| CodegenError::Source(e.to_string()))?;
        Ok(filter_entities(all, prefix))
    }

    fn get_entity_type(&self, metaclass: &str) -> Result<EntityType, CodegenError> {
        self.get_json(&format!("/metadata/entities/{}", metaclass))
            .map_err(|e| CodegenError::Source(e.to_string()))
    }

    fn list_enum_types(&self, prefix: &str) -> Result<Vec<EnumType>, CodegenError> {
        let all: Vec<EnumType> = self
            .get_json("/metadata/enums")
            .map_err(|e| CodegenError::Source(e.to_string()))?;
        Ok(filter_enums(all, prefix))
    }

    // The v2 API has no single-enum endpoint; select from the list.
    fn get_enum_type(&self, name: &str) -> Result<EnumType, CodegenError> {
        let all: Vec<EnumType> = self
            .get_json("/metadata/enums")
            .map_err(|e| CodegenError::Source(e.to_string()))?;
        all.into_iter()
            .find(|e| e.name == name)
            .ok_or_else(|| CodegenError::Source(format!("unknown enum {}", name)))
    }
}
