use crate::memory::lock;
use crate::{AccessToken, ServiceError, ServiceResult, SessionAuthority};

use pp_core::{FederatedCredential, Identity};

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use log::info;
use tokio::sync::watch;
use uuid::Uuid;

const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone)]
struct Account {
    uid: String,
    password: String,
}

/// Accounts kept in memory; sessions are broadcast like the real authority.
pub struct InMemorySessionAuthority {
    accounts: Mutex<HashMap<String, Account>>,
    providers: Mutex<HashMap<String, Identity>>,
    next_failure: Mutex<Option<String>>,
    session: watch::Sender<Option<Identity>>,
}

impl Default for InMemorySessionAuthority {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySessionAuthority {
    pub fn new() -> Self {
        let (session, _) = watch::channel(None);
        Self {
            accounts: Mutex::new(HashMap::new()),
            providers: Mutex::new(HashMap::new()),
            next_failure: Mutex::new(None),
            session,
        }
    }

    /// Pre-register an email/password account, returning its identity
    pub fn add_account(&self, email: &str, password: &str) -> Identity {
        let uid = Uuid::new_v4().simple().to_string();
        lock(&self.accounts).insert(
            email.to_string(),
            Account {
                uid: uid.clone(),
                password: password.to_string(),
            },
        );
        Identity::new(uid, email)
    }

    /// Accept `id_token` from a federated provider as `identity`
    pub fn register_provider_token(&self, id_token: &str, identity: Identity) {
        lock(&self.providers).insert(id_token.to_string(), identity);
    }

    /// Make the next sign-in style call fail with `message`
    pub fn fail_next(&self, message: impl Into<String>) {
        *lock(&self.next_failure) = Some(message.into());
    }

    /// Publish `identity` as signed in without credentials
    pub fn force_session(&self, identity: Option<Identity>) {
        self.session.send_replace(identity);
    }

    pub fn current(&self) -> Option<Identity> {
        self.session.borrow().clone()
    }

    fn take_failure(&self) -> ServiceResult<()> {
        match lock(&self.next_failure).take() {
            Some(message) => Err(ServiceError::api("AUTH_ERROR", message)),
            None => Ok(()),
        }
    }

    fn publish(&self, identity: Identity) -> Identity {
        info!("Session started for {}", identity.uid);
        self.session.send_replace(Some(identity.clone()));
        identity
    }
}

fn rejected(message: &str) -> ServiceError {
    ServiceError::api("400", message)
}

#[async_trait]
impl SessionAuthority for InMemorySessionAuthority {
    fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.session.subscribe()
    }

    async fn sign_up(&self, email: &str, password: &str) -> ServiceResult<Identity> {
        self.take_failure()?;

        let email = email.trim();
        if !email.contains('@') {
            return Err(rejected("The email address is badly formatted."));
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(rejected("Password should be at least 6 characters."));
        }
        if lock(&self.accounts).contains_key(email) {
            return Err(rejected(
                "The email address is already in use by another account.",
            ));
        }

        let identity = self.add_account(email, password);
        Ok(self.publish(identity))
    }

    async fn sign_in(&self, email: &str, password: &str) -> ServiceResult<Identity> {
        self.take_failure()?;

        let email = email.trim();
        let account = lock(&self.accounts).get(email).cloned();
        match account {
            Some(account) if account.password == password => {
                Ok(self.publish(Identity::new(account.uid, email)))
            }
            _ => Err(rejected("Incorrect email or password.")),
        }
    }

    async fn sign_in_with_provider(
        &self,
        credential: &FederatedCredential,
    ) -> ServiceResult<Identity> {
        self.take_failure()?;

        let identity = lock(&self.providers).get(&credential.id_token).cloned();
        match identity {
            Some(identity) => Ok(self.publish(identity)),
            None => Err(rejected("The sign-in provider rejected the credential.")),
        }
    }

    async fn sign_out(&self) -> ServiceResult<()> {
        self.session.send_replace(None);
        info!("Signed out");
        Ok(())
    }
}

#[async_trait]
impl AccessToken for InMemorySessionAuthority {
    async fn bearer_token(&self) -> ServiceResult<String> {
        self.current()
            .map(|identity| format!("memory-token-{}", identity.uid))
            .ok_or_else(ServiceError::not_signed_in)
    }
}
