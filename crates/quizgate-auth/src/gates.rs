//! Non-HTTP access gates.
//!
//! `AllowAllGate` is the injected no-op authorizer for runs with auth
//! disabled; `StaticGate` returns canned outcomes for wiring tests.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use quizgate_core::traits::AccessGate;

/// Gate that authorizes everything. Used when the session runs without an
/// authorization service (`--no-auth`).
pub struct AllowAllGate;

#[async_trait]
impl AccessGate for AllowAllGate {
    fn name(&self) -> &str {
        "allow-all"
    }

    async fn exchange_code(&self, _code: &str) -> String {
        "local".to_string()
    }

    async fn has_permission(&self, _token: &str, _action: &str) -> bool {
        true
    }
}

/// Gate with configurable outcomes, for testing session wiring without a
/// live authorization service.
pub struct StaticGate {
    token: String,
    valid: bool,
    permissions: Vec<String>,
    exchange_calls: AtomicU32,
    validate_calls: AtomicU32,
}

impl StaticGate {
    /// A gate whose token carries exactly the given permissions.
    pub fn with_permissions<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            token: "static-token".to_string(),
            valid: true,
            permissions: permissions.into_iter().map(Into::into).collect(),
            exchange_calls: AtomicU32::new(0),
            validate_calls: AtomicU32::new(0),
        }
    }

    /// A gate whose code exchange never produces a token.
    pub fn without_token() -> Self {
        Self {
            token: String::new(),
            valid: true,
            permissions: Vec::new(),
            exchange_calls: AtomicU32::new(0),
            validate_calls: AtomicU32::new(0),
        }
    }

    /// A gate whose token the service reports as invalid.
    pub fn invalid_token<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            valid: false,
            ..Self::with_permissions(permissions)
        }
    }

    pub fn exchange_calls(&self) -> u32 {
        self.exchange_calls.load(Ordering::Relaxed)
    }

    pub fn validate_calls(&self) -> u32 {
        self.validate_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl AccessGate for StaticGate {
    fn name(&self) -> &str {
        "static"
    }

    async fn exchange_code(&self, _code: &str) -> String {
        self.exchange_calls.fetch_add(1, Ordering::Relaxed);
        self.token.clone()
    }

    async fn has_permission(&self, _token: &str, action: &str) -> bool {
        self.validate_calls.fetch_add(1, Ordering::Relaxed);
        self.valid && self.permissions.iter().any(|p| p == action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn allow_all_always_authorizes() {
        let gate = AllowAllGate;
        let token = gate.exchange_code("anything").await;
        assert!(!token.is_empty());
        assert!(gate.has_permission(&token, "start_test").await);
    }

    #[tokio::test]
    async fn static_gate_checks_membership() {
        let gate = StaticGate::with_permissions(["view", "start_test"]);
        let token = gate.exchange_code("code").await;
        assert!(gate.has_permission(&token, "start_test").await);
        assert!(!gate.has_permission(&token, "admin").await);
        assert_eq!(gate.exchange_calls(), 1);
        assert_eq!(gate.validate_calls(), 2);
    }

    #[tokio::test]
    async fn static_gate_invalid_token_denies_everything() {
        let gate = StaticGate::invalid_token(["start_test"]);
        assert!(!gate.has_permission("static-token", "start_test").await);
    }

    #[tokio::test]
    async fn static_gate_without_token_yields_empty() {
        let gate = StaticGate::without_token();
        assert!(gate.exchange_code("code").await.is_empty());
    }
}
