//! Who is signed in.
//!
//! Checkout and order history only *read* the session through [`SessionProvider`]. The
//! shipped implementation, [`StoredSession`], keeps the bearer token and the user record
//! in the key-value store the way the auth flow leaves them.

mod stored;

pub use stored::StoredSession;

use crate::model::UserIdentity;
use async_trait::async_trait;

/// Read access to the current session.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// The bearer token, if signed in.
    async fn token(&self) -> Option<String>;

    /// The signed-in user, if any.
    async fn current_user(&self) -> Option<UserIdentity>;
}
