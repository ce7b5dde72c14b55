// Access-credential loading and exposure validation
//
// The credential document is JSON-like; arbitrary surrounding structure is
// tolerated, but the two named key fields must be present, non-empty strings
// under a fixed length ceiling. Partial extraction is total failure: both
// fields are discarded together, never returned half-populated. Before the
// credentials are used, the file's permission bits must deny group and other
// access outright.

use serde_json::Value;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::error::{HubError, HubResult};

pub const DEFAULT_CREDENTIALS_FILE: &str = "rh00d.sct";

/// Ceiling on either key field, rejecting unbounded/garbage input.
pub const MAX_FIELD_LEN: usize = 512;

/// Permission bits that expose a file to group or other principals.
const GROUP_OTHER_BITS: u32 = 0o077;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub private_key: String,
}

impl Credentials {
    /// Extract both key fields from the credential document, or fail.
    pub fn load<P: AsRef<Path>>(path: P) -> HubResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| HubError::CredentialsInvalid(format!("{}: {}", path.display(), e)))?;

        let doc: Value = serde_json::from_str(&content)
            .map_err(|e| HubError::CredentialsInvalid(format!("{}: {}", path.display(), e)))?;

        let api_key = string_field(&doc, "api_key")?;
        let private_key = string_field(&doc, "private_key")?;

        Ok(Self {
            api_key,
            private_key,
        })
    }

    /// Hard precondition for any credential use: reject the file whenever its
    /// permission bits grant access to anyone other than the owner.
    pub fn verify_permissions<P: AsRef<Path>>(path: P) -> HubResult<()> {
        let path = path.as_ref();
        let metadata = fs::metadata(path)
            .map_err(|e| HubError::CredentialsInvalid(format!("{}: {}", path.display(), e)))?;

        let mode = metadata.permissions().mode();
        if mode & GROUP_OTHER_BITS != 0 {
            return Err(HubError::SecurityViolation(format!(
                "{} has group/other permissions (mode {:03o}); set to 0600 and try again",
                path.display(),
                mode & 0o777
            )));
        }

        Ok(())
    }
}

fn string_field(doc: &Value, name: &'static str) -> HubResult<String> {
    let value = doc
        .get(name)
        .ok_or_else(|| HubError::CredentialsInvalid(format!("missing field {}", name)))?;

    let s = value
        .as_str()
        .ok_or_else(|| HubError::CredentialsInvalid(format!("field {} is not a string", name)))?;

    if s.is_empty() {
        return Err(HubError::CredentialsInvalid(format!("field {} is empty", name)));
    }
    if s.len() >= MAX_FIELD_LEN {
        return Err(HubError::CredentialsInvalid(format!(
            "field {} exceeds {} bytes",
            name, MAX_FIELD_LEN
        )));
    }

    Ok(s.to_string())
}
