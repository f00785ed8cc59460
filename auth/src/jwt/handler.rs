use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Encoder/decoder for session tokens.
///
/// Uses HS256 (HMAC with SHA-256). Decoding does not require an `exp` claim,
/// which session tokens never carry.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl JwtHandler {
    /// Create a new handler from a signing secret.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens; at least 32 bytes for HS256
    ///
    /// # Returns
    /// JwtHandler configured with HS256
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Encode claims into a signed token.
    ///
    /// # Arguments
    /// * `claims` - Session claims to embed
    ///
    /// # Returns
    /// Compact JWT string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and verify a token's signature.
    ///
    /// # Arguments
    /// * `token` - Compact JWT string
    ///
    /// # Returns
    /// The embedded claims
    ///
    /// # Errors
    /// * `DecodingFailed` - Signature invalid or token malformed
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // Session tokens have no `exp` claim
        validation.required_spec_claims.clear();

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| JwtError::DecodingFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");
        let claims = Claims::for_user("user123", "root");

        let token = handler.encode(&claims).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = handler.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_garbage_token() {
        let handler = JwtHandler::new(b"my_secret_key_at_least_32_bytes_long!");

        let result = handler.decode("invalid.token.here");
        assert!(matches!(result, Err(JwtError::DecodingFailed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let handler1 = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let handler2 = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");

        let token = handler1
            .encode(&Claims::for_user("user123", "root"))
            .expect("Failed to encode token");

        let result = handler2.decode(&token);
        assert!(result.is_err());
    }
}
