use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer};

pub struct Token {
    pub access_token: String,
    pub expiration: DateTime<Utc>,
}

#[derive(Deserialize)]
struct TokenData {
    access_token: String,
    expires_in: u64,
}

impl Token {
    pub fn is_fresh(&self) -> bool {
        Utc::now() < self.expiration
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token_data = TokenData::deserialize(deserializer)?;
        let expiration = Utc::now() + Duration::seconds(token_data.expires_in as i64 - 1);

        Ok(Token {
            access_token: token_data.access_token,
            expiration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_one_second_early() {
        let before = Utc::now();
        let token: Token = serde_json::from_str(
            r#"{"access_token": "ya29.x", "expires_in": 3599, "token_type": "Bearer"}"#,
        )
        .unwrap();

        assert_eq!(token.access_token, "ya29.x");
        assert!(token.expiration >= before + Duration::seconds(3598));
        assert!(token.is_fresh());
    }

    #[test]
    fn zero_lifetime_token_is_stale() {
        let token: Token =
            serde_json::from_str(r#"{"access_token": "t", "expires_in": 0}"#).unwrap();
        assert!(!token.is_fresh());
    }
}
