/*
 * Responsibility
 * - access-token verification service (public surface)
 */
mod access_jwt;

pub use access_jwt::{AccessJwtError, AccessTokenClaims, AuthService, VerifiedAccessToken};
