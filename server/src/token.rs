use anyhow::{Result, bail};
use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use jiff::Timestamp;
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Session ids travel in the cookie as `<simple-uuid>.<signature>` so a
/// client cannot mint or alter one.
pub trait SignedTokenExt: Sized {
    fn from_token(token: &str, secret: &SecretString) -> Result<Self>;
    fn as_token(&self, secret: &SecretString) -> Result<String>;

    fn jiff_timestamp(&self) -> Timestamp;
}

impl SignedTokenExt for Uuid {
    fn from_token(token: &str, secret: &SecretString) -> Result<Self> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 2 {
            bail!("invalid token format");
        }

        let uuid_simple = parts[0];
        let signature_b64 = parts[1];

        // Verify HMAC signature
        let mut mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())?;
        mac.update(uuid_simple.as_bytes());
        let signature = BASE64_URL_SAFE_NO_PAD.decode(signature_b64)?;
        mac.verify_slice(&signature)?;

        let uuid = Uuid::parse_str(uuid_simple)?;
        Ok(uuid)
    }

    fn as_token(&self, secret: &SecretString) -> Result<String> {
        let id_str = self.simple().to_string();
        let mut mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())?;
        mac.update(id_str.as_bytes());
        let signature = BASE64_URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
        Ok(format!("{}.{}", id_str, signature))
    }

    fn jiff_timestamp(&self) -> Timestamp {
        let ts = self.get_timestamp().unwrap();

        let (seconds, nanos) = ts.to_unix();
        Timestamp::new(seconds as i64, nanos as i32).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> SecretString {
        "test-signing-secret".into()
    }

    #[test]
    fn token_round_trips() {
        let id = Uuid::now_v7();
        let token = id.as_token(&secret()).unwrap();
        assert_eq!(Uuid::from_token(&token, &secret()).unwrap(), id);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let id = Uuid::now_v7();
        let token = id.as_token(&secret()).unwrap();

        let other = Uuid::now_v7();
        let (_, signature) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", other.simple(), signature);

        assert!(Uuid::from_token(&forged, &secret()).is_err());
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let id = Uuid::now_v7();
        let token = id.as_token(&secret()).unwrap();
        assert!(Uuid::from_token(&token, &"other-secret".into()).is_err());
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        for token in ["", "no-dot", "a.b.c", "not-a-uuid.c2ln"] {
            assert!(Uuid::from_token(token, &secret()).is_err(), "{token:?}");
        }
    }

    #[test]
    fn v7_id_carries_its_creation_time() {
        let id = Uuid::now_v7();
        let age = Timestamp::now().duration_since(id.jiff_timestamp());
        assert!(age.as_secs() < 5);
    }
}
