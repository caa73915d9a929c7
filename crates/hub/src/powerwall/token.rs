// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory store for the gateway bearer token.

use tokio::sync::RwLock;

/// Holds the current bearer token, if any.
///
/// The lock guards individual reads and writes only. The
/// check-then-authenticate sequence in the client runs unlocked, so two
/// concurrent callers can both observe an empty store and both log in;
/// the last token written wins and either one is valid on the gateway.
#[derive(Debug, Default)]
pub struct TokenStore {
    token: RwLock<Option<String>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token, or `None` when unauthenticated.
    pub async fn get(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Replace the stored token.
    pub async fn set(&self, token: String) {
        *self.token.write().await = Some(token);
    }

    /// Drop the stored token.
    pub async fn clear(&self) {
        *self.token.write().await = None;
    }
}
