//! Token issuance and verification.

use crate::{errors::*, types::*};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Signs and validates HS384 user tokens with one process-wide secret
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Option<Duration>,
}

impl TokenIssuer {
    /// Create an issuer from the shared secret
    ///
    /// With `ttl` set, issued tokens carry an `exp` claim and tokens without
    /// one are rejected. Without it tokens never expire.
    pub fn new(secret: &[u8], ttl: Option<Duration>) -> Result<Self> {
        if secret.is_empty() {
            return Err(TokenError::InvalidKey("signing key is empty".to_string()));
        }
        if secret.len() < MIN_RECOMMENDED_KEY_LEN {
            warn!(
                "JWT signing key is {} bytes, shorter than the recommended {}",
                secret.len(),
                MIN_RECOMMENDED_KEY_LEN
            );
        }

        let mut validation = Validation::new(Algorithm::HS384);
        validation.set_audience(&[TOKEN_AUDIENCE]);
        if ttl.is_some() {
            validation.set_required_spec_claims(&["sub", "aud", "exp"]);
        } else {
            validation.set_required_spec_claims(&["sub", "aud"]);
        }
        // An exp claim is always honored, even when this issuer does not set one.
        validation.validate_exp = true;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        })
    }

    /// Lifetime of issued tokens, if they expire
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Issue a signed token for `subject`
    pub fn issue(&self, subject: &str) -> Result<String> {
        if subject.is_empty() {
            return Err(TokenError::InvalidSubject("subject is empty".to_string()));
        }

        let now = current_timestamp();
        let claims = TokenClaims {
            sub: subject.to_string(),
            aud: TOKEN_AUDIENCE.to_string(),
            iat: now,
            exp: self.ttl.map(|ttl| now + ttl.as_secs()),
        };

        let token = encode(&Header::new(Algorithm::HS384), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Verify a token and extract its claims
    ///
    /// Returns `None` for any failure (bad signature, malformed token, wrong
    /// algorithm, wrong audience, expired) without telling which.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        let data = match decode::<TokenClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data,
            Err(e) => {
                debug!("Token rejected: {:?}", e.kind());
                return None;
            }
        };

        if data.claims.sub.is_empty() {
            debug!("Token rejected: empty subject");
            return None;
        }

        Some(Claims {
            username: data.claims.sub,
            raw_token: token.to_string(),
        })
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &Algorithm::HS384)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
