//! Kubernetes `Secret` manifest rendering.
//!
//! Each provider section of the config is gated by its `enabled` toggle; every
//! field of an enabled provider becomes a base64-encoded `data` entry. Values
//! are passed through untouched.

use crate::domain::error::LauncherError;
use crate::ports::config_port::ConfigPort;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

pub const SECTION: &str = "secrets";
pub const DEFAULT_NAMESPACE: &str = "default";
pub const DEFAULT_NAME_PREFIX: &str = "ae";

/// One `data` entry: manifest key and the config key it is read from.
#[derive(Debug, Clone, Copy)]
pub struct SecretField {
    pub data_key: &'static str,
    pub config_key: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SecretProvider {
    pub section: &'static str,
    pub suffix: &'static str,
    pub fields: &'static [SecretField],
}

const fn field(data_key: &'static str, config_key: &'static str) -> SecretField {
    SecretField {
        data_key,
        config_key,
    }
}

pub const PROVIDERS: &[SecretProvider] = &[
    SecretProvider {
        section: "minio",
        suffix: "s3",
        fields: &[
            field("s3-access-key", "access_key"),
            field("s3-secret-key", "secret_key"),
            field("s3-region-name", "region_name"),
            field("s3-address", "address"),
            field("s3-secure", "secure"),
        ],
    },
    SecretProvider {
        section: "aws",
        suffix: "aws",
        fields: &[
            field("aws-access-key-id", "access_key_id"),
            field("aws-secret-access-key", "secret_access_key"),
            field("aws-default-region", "default_region"),
        ],
    },
    SecretProvider {
        section: "iex",
        suffix: "iex",
        fields: &[
            field("iex-token", "token"),
            field("iex-publishable-token", "publishable_token"),
        ],
    },
    SecretProvider {
        section: "tradier",
        suffix: "tradier",
        fields: &[field("td-token", "token")],
    },
    SecretProvider {
        section: "slack",
        suffix: "slack",
        fields: &[
            field("slack-webhook", "webhook"),
            field("slack-access-token", "access_token"),
            field("slack-channels", "channels"),
        ],
    },
    SecretProvider {
        section: "redis",
        suffix: "redis",
        fields: &[
            field("redis-address", "address"),
            field("redis-password", "password"),
            field("redis-db", "db"),
        ],
    },
];

/// Namespaces are DNS labels; other object names DNS subdomains.
pub const MAX_NAMESPACE_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 253;
const LONGEST_SUFFIX: usize = 8;

pub const REGISTRY_SECTION: &str = "registry";
pub const REGISTRY_SUFFIX: &str = "registry";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretManifest {
    pub name: String,
    pub namespace: String,
    pub secret_type: &'static str,
    /// `(key, base64 value)` in table order.
    pub data: Vec<(String, String)>,
}

impl SecretManifest {
    pub fn to_yaml(&self) -> String {
        let mut out = String::new();
        out.push_str("apiVersion: v1\n");
        out.push_str("kind: Secret\n");
        out.push_str("metadata:\n");
        out.push_str(&format!("  name: {}\n", self.name));
        out.push_str(&format!("  namespace: {}\n", self.namespace));
        out.push_str(&format!("type: {}\n", self.secret_type));
        out.push_str("data:\n");
        for (key, value) in &self.data {
            out.push_str(&format!("  {key}: \"{value}\"\n"));
        }
        out
    }
}

pub fn encode(value: &str) -> String {
    STANDARD.encode(value.as_bytes())
}

/// Every enabled provider's manifest, in table order, registry last.
pub fn build_secret_manifests(
    config: &dyn ConfigPort,
) -> Result<Vec<SecretManifest>, LauncherError> {
    let namespace = config.get_string_or(SECTION, "namespace", DEFAULT_NAMESPACE);
    let prefix = config.get_string_or(SECTION, "name_prefix", DEFAULT_NAME_PREFIX);
    validate_name(&namespace, "namespace", MAX_NAMESPACE_LEN)?;
    validate_name(&prefix, "name_prefix", MAX_NAME_LEN - LONGEST_SUFFIX - 1)?;

    let mut manifests = Vec::new();
    for provider in PROVIDERS {
        if !config.get_bool(provider.section, "enabled", false) {
            log::debug!("[{}] disabled, skipping", provider.section);
            continue;
        }
        let data = provider
            .fields
            .iter()
            .map(|f| {
                let value = config
                    .get_string(provider.section, f.config_key)
                    .unwrap_or_default();
                (f.data_key.to_string(), encode(&value))
            })
            .collect();
        manifests.push(SecretManifest {
            name: format!("{prefix}-{}", provider.suffix),
            namespace: namespace.clone(),
            secret_type: "Opaque",
            data,
        });
    }

    if config.get_bool(REGISTRY_SECTION, "enabled", false) {
        manifests.push(SecretManifest {
            name: format!("{prefix}-{REGISTRY_SUFFIX}"),
            namespace,
            secret_type: "kubernetes.io/dockerconfigjson",
            data: vec![(
                ".dockerconfigjson".to_string(),
                encode(&docker_config_json(config)?),
            )],
        });
    }

    Ok(manifests)
}

/// Multi-document YAML for every enabled provider; empty when none are.
pub fn render_secret_manifests(config: &dyn ConfigPort) -> Result<String, LauncherError> {
    let docs: Vec<String> = build_secret_manifests(config)?
        .iter()
        .map(SecretManifest::to_yaml)
        .collect();
    log::info!("rendered {} secret manifest(s)", docs.len());
    Ok(docs.join("---\n"))
}

fn docker_config_json(config: &dyn ConfigPort) -> Result<String, LauncherError> {
    let get = |key: &str| config.get_string(REGISTRY_SECTION, key).unwrap_or_default();
    let address = get("address");
    if address.trim().is_empty() {
        return Err(LauncherError::ConfigInvalid {
            section: REGISTRY_SECTION.to_string(),
            key: "address".to_string(),
            reason: "required when the registry secret is enabled".to_string(),
        });
    }
    let username = get("username");
    let password = get("password");

    let mut auths = serde_json::Map::new();
    auths.insert(
        address.trim().to_string(),
        serde_json::json!({
            "username": username,
            "password": password,
            "email": get("email"),
            "auth": encode(&format!("{username}:{password}")),
        }),
    );
    Ok(serde_json::json!({ "auths": auths }).to_string())
}

/// Kubernetes object names: lowercase alphanumerics and `-`, alphanumeric ends,
/// at most `max_len` characters.
fn validate_name(value: &str, key: &str, max_len: usize) -> Result<(), LauncherError> {
    if value.len() > max_len {
        return Err(LauncherError::ConfigInvalid {
            section: SECTION.to_string(),
            key: key.to_string(),
            reason: format!("longer than {max_len} characters"),
        });
    }
    let valid = value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !value.starts_with('-')
        && !value.ends_with('-');
    if valid {
        Ok(())
    } else {
        Err(LauncherError::ConfigInvalid {
            section: SECTION.to_string(),
            key: key.to_string(),
            reason: format!("{value:?} is not a valid Kubernetes name"),
        })
    }
}
