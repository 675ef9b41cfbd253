/*
[INPUT]:  Query string to sign and the API secret
[OUTPUT]: Hex-encoded HMAC-SHA256 signature
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or parameter format
*/

use ring::hmac;

/// Signs query strings for authenticated endpoints.
///
/// Binance signs the full query string: `HMAC-SHA256(secret, query)`, sent
/// as a lowercase hex `signature` parameter.
pub struct RequestSigner {
    key: hmac::Key,
}

impl RequestSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes()),
        }
    }

    pub fn sign(&self, query: &str) -> String {
        let tag = hmac::sign(&self.key, query.as_bytes());
        hex::encode(tag.as_ref())
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RequestSigner(HMAC-SHA256)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_known_vector() {
        // Example from the Binance API documentation.
        let signer = RequestSigner::new("NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j");
        let query = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";

        assert_eq!(
            signer.sign(query),
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let signature = RequestSigner::new("key").sign("data");
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
    }

    #[test]
    fn test_different_secrets_differ() {
        let query = "symbol=BTCUSDT&timestamp=1000000";
        assert_ne!(
            RequestSigner::new("secret_a").sign(query),
            RequestSigner::new("secret_b").sign(query)
        );
    }

    #[test]
    fn test_debug_hides_key_material() {
        let rendered = format!("{:?}", RequestSigner::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
    }
}
