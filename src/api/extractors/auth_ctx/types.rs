/*
 * Responsibility
 * - the "authenticated context" type as seen from handlers
 * - middleware verifies the token and stores this in request extensions;
 *   handlers only ever see this type, never the raw credential
 */

use uuid::Uuid;

/// Context attached to an authenticated request.
///
/// - `user_id` is the verified subject (UUID by project convention)
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub user_id: Uuid,
}

impl AuthCtx {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}
