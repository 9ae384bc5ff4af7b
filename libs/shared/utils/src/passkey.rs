use base64::{engine::general_purpose, Engine as _};

/// Encode the admin passkey for transport in the `X-Admin-Passkey` header.
pub fn encode_passkey(passkey: &str) -> String {
    general_purpose::STANDARD.encode(passkey)
}

pub fn decode_passkey(encoded: &str) -> Option<String> {
    let bytes = general_purpose::STANDARD.decode(encoded).ok()?;
    String::from_utf8(bytes).ok()
}

/// Compare an encoded header value against the configured passkey. An empty
/// configured passkey never matches; the gate stays closed until configured.
pub fn verify_passkey(encoded: &str, configured: &str) -> bool {
    if configured.is_empty() {
        return false;
    }
    decode_passkey(encoded).is_some_and(|passkey| passkey == configured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_the_configured_key() {
        let encoded = encode_passkey("111111");
        assert_eq!(decode_passkey(&encoded).as_deref(), Some("111111"));
        assert!(verify_passkey(&encoded, "111111"));
    }

    #[test]
    fn rejects_wrong_or_malformed_keys() {
        assert!(!verify_passkey(&encode_passkey("222222"), "111111"));
        assert!(!verify_passkey("%%%not-base64%%%", "111111"));
    }

    #[test]
    fn unconfigured_gate_stays_closed() {
        assert!(!verify_passkey(&encode_passkey(""), ""));
    }
}
