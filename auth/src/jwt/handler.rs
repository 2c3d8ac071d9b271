use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::JwtError;

/// JWT signing and verification for a single secret.
///
/// Generic over the claims type so callers define their own token payloads.
/// Every token handled here must carry an `exp` claim; verification rejects
/// expired tokens with no leeway.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtHandler {
    /// Create a handler for the given secret (HS256).
    ///
    /// The secret should be at least 256 bits and come from configuration,
    /// never from a compiled-in default.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign claims into a compact JWT string.
    ///
    /// # Errors
    /// * `EncodingFailed` - claims could not be serialized or signed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify signature and expiry, returning the decoded claims.
    ///
    /// # Errors
    /// * `TokenExpired` - the `exp` claim is in the past
    /// * `InvalidSignature` - the token was not signed with this secret
    /// * `DecodingFailed` - malformed token or claims mismatch
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T, JwtError> {
        jsonwebtoken::decode::<T>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::DecodingFailed(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestClaims {
        sub: String,
        role: String,
        exp: i64,
    }

    fn claims(exp: i64) -> TestClaims {
        TestClaims {
            sub: "user123".to_string(),
            role: "ADMIN".to_string(),
            exp,
        }
    }

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let token = handler.encode(&claims(i64::MAX)).expect("encode failed");
        assert!(!token.is_empty());

        let decoded: TestClaims = handler.decode(&token).expect("decode failed");
        assert_eq!(decoded, claims(i64::MAX));
    }

    #[test]
    fn test_decode_expired_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let token = handler.encode(&claims(1)).expect("encode failed");
        let result = handler.decode::<TestClaims>(&token);
        assert_eq!(result, Err(JwtError::TokenExpired));
    }

    #[test]
    fn test_decode_malformed_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let result = handler.decode::<TestClaims>("not.a.token");
        assert!(matches!(result, Err(JwtError::DecodingFailed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let token = handler1.encode(&claims(i64::MAX)).expect("encode failed");

        let result = handler2.decode::<TestClaims>(&token);
        assert_eq!(result, Err(JwtError::InvalidSignature));
    }
}
