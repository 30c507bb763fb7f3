//! Credential construction for remote API calls.
//!
//! Two credential shapes exist: an acting user authenticated through the
//! identity-provider application key (user key `Instance\username` plus a
//! derived auth code), and the configured admin account authenticated by
//! password.

use sha1::{Digest, Sha1};

use vodbridge_core::config::platform::PlatformConfig;

/// Authentication info attached to every remote request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformAuth {
    /// User key, instance-qualified for identity-provider users.
    pub user_key: String,
    /// Password (admin credential only).
    pub password: Option<String>,
    /// Derived auth code (identity-provider credential only).
    pub auth_code: Option<String>,
}

impl PlatformAuth {
    /// Credential for an acting LMS user, authenticated via the
    /// identity-provider application key.
    pub fn for_user(config: &PlatformConfig, username: &str) -> Self {
        let user_key = external_user_key(config, username);
        let payload = format!("{}@{}", user_key, config.server_hostname);
        let auth_code = signed_code(&payload, &config.application_key);
        Self {
            user_key,
            password: None,
            auth_code: Some(auth_code),
        }
    }

    /// The configured admin credential, used for elevated lookups and
    /// remote user provisioning.
    pub fn admin(config: &PlatformConfig) -> Self {
        Self {
            user_key: config.admin_userkey.clone(),
            password: Some(config.admin_password.clone()),
            auth_code: None,
        }
    }
}

/// Instance-qualified user key for an LMS username.
pub fn external_user_key(config: &PlatformConfig, username: &str) -> String {
    format!("{}\\{}", config.instance_name, username)
}

/// The platform's signing scheme: uppercase hex SHA-1 over
/// `"{payload}|{key}"`. Used for both API auth codes and the SSO
/// handshake.
pub fn signed_code(payload: &str, key: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(format!("{payload}|{key}").as_bytes());
    hex::encode(hasher.finalize()).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PlatformConfig {
        PlatformConfig {
            server_hostname: "host.example".to_string(),
            instance_name: "lms".to_string(),
            application_key: "KEY".to_string(),
            admin_userkey: "admin".to_string(),
            admin_password: "secret".to_string(),
            ..PlatformConfig::default()
        }
    }

    #[test]
    fn test_external_user_key_is_instance_qualified() {
        assert_eq!(external_user_key(&config(), "alice"), "lms\\alice");
    }

    #[test]
    fn test_user_auth_has_code_no_password() {
        let auth = PlatformAuth::for_user(&config(), "alice");
        assert_eq!(auth.user_key, "lms\\alice");
        assert!(auth.password.is_none());
        let code = auth.auth_code.unwrap();
        assert_eq!(code.len(), 40);
        assert_eq!(code, code.to_uppercase());
    }

    #[test]
    fn test_admin_auth_has_password_no_code() {
        let auth = PlatformAuth::admin(&config());
        assert_eq!(auth.user_key, "admin");
        assert_eq!(auth.password.as_deref(), Some("secret"));
        assert!(auth.auth_code.is_none());
    }

    #[test]
    fn test_signed_code_known_vector() {
        // Externally computed: SHA1("serverName=host.example&expiration=1700000000|KEY")
        assert_eq!(
            signed_code("serverName=host.example&expiration=1700000000", "KEY"),
            "495DD99F5EAEB88BDB5B1160801B71BBF4CD57D9"
        );
    }
}
