use crate::error::OrchestratorError;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const DEFAULT_TOLERANCE_SECS: i64 = 300;

#[derive(Debug)]
pub struct SignatureHeader {
    pub timestamp: i64,
    pub signatures: Vec<String>,
}

/// Parses a `t=<unix>,v1=<hex>` header. The header may carry several v1
/// entries during a key roll; schemes other than t and v1 are skipped.
pub fn parse_header(header: &str) -> Result<SignatureHeader, OrchestratorError> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for part in header.split(',') {
        let mut kv = part.trim().splitn(2, '=');
        match (kv.next(), kv.next()) {
            (Some("t"), Some(value)) => {
                timestamp = value.parse::<i64>().ok();
            }
            (Some("v1"), Some(value)) => signatures.push(value.to_string()),
            _ => {}
        }
    }

    let timestamp = timestamp.ok_or_else(|| {
        OrchestratorError::Signature("signature header has no timestamp".to_string())
    })?;
    if signatures.is_empty() {
        return Err(OrchestratorError::Signature(
            "signature header has no v1 signature".to_string(),
        ));
    }

    Ok(SignatureHeader {
        timestamp,
        signatures,
    })
}

/// Checks the HMAC-SHA256 of `"{timestamp}.{payload}"` against every v1
/// entry. The payload must be the raw request bytes; re-serialized JSON will
/// not match.
pub fn verify(
    payload: &[u8],
    header: &str,
    secret: &str,
    tolerance_secs: i64,
    now_unix: i64,
) -> Result<(), OrchestratorError> {
    let parsed = parse_header(header)?;

    // Saturating: `t` is sender-controlled and may sit at the i64 extremes.
    if now_unix.saturating_sub(parsed.timestamp) > tolerance_secs {
        return Err(OrchestratorError::Signature(
            "signature timestamp outside tolerance".to_string(),
        ));
    }

    let timestamp = parsed.timestamp.to_string();
    for candidate in &parsed.signatures {
        let raw = match hex::decode(candidate) {
            Ok(raw) => raw,
            Err(_) => continue,
        };

        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| OrchestratorError::Signature(e.to_string()))?;
        mac.update(timestamp.as_bytes());
        mac.update(b".");
        mac.update(payload);
        if mac.verify_slice(&raw).is_ok() {
            return Ok(());
        }
    }

    Err(OrchestratorError::Signature(
        "no matching v1 signature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(payload: &[u8], secret: &str, timestamp: i64) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(format!("{timestamp}.").as_bytes());
        mac.update(payload);
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn parse_extracts_timestamp_and_signatures() {
        let parsed = parse_header("t=1700000000,v1=abc,v1=def,v0=ignored").unwrap();
        assert_eq!(parsed.timestamp, 1_700_000_000);
        assert_eq!(parsed.signatures, vec!["abc", "def"]);
    }

    #[test]
    fn parse_rejects_missing_parts() {
        assert!(parse_header("v1=abc").is_err());
        assert!(parse_header("t=1700000000").is_err());
        assert!(parse_header("garbage").is_err());
        assert!(parse_header("").is_err());
    }

    #[test]
    fn verify_accepts_matching_signature() {
        let payload = br#"{"type":"payment_intent.succeeded"}"#;
        let now = 1_700_000_000;
        let header = format!("t={},v1={}", now, sign(payload, "whsec_test", now));

        assert!(verify(payload, &header, "whsec_test", DEFAULT_TOLERANCE_SECS, now).is_ok());
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let payload = br#"{"type":"payment_intent.succeeded"}"#;
        let now = 1_700_000_000;
        let header = format!("t={},v1={}", now, sign(payload, "whsec_other", now));

        assert!(verify(payload, &header, "whsec_test", DEFAULT_TOLERANCE_SECS, now).is_err());
    }

    #[test]
    fn verify_rejects_tampered_payload() {
        let signed = br#"{"type":"payment_intent.succeeded"}"#;
        let tampered = br#"{"type":"payment_intent.succeeded","extra":1}"#;
        let now = 1_700_000_000;
        let header = format!("t={},v1={}", now, sign(signed, "whsec_test", now));

        assert!(verify(tampered, &header, "whsec_test", DEFAULT_TOLERANCE_SECS, now).is_err());
    }

    #[test]
    fn verify_rejects_stale_timestamp() {
        let payload = br#"{}"#;
        let signed_at = 1_700_000_000;
        let now = signed_at + DEFAULT_TOLERANCE_SECS + 1;
        let header = format!("t={},v1={}", signed_at, sign(payload, "whsec_test", signed_at));

        assert!(verify(payload, &header, "whsec_test", DEFAULT_TOLERANCE_SECS, now).is_err());
    }

    #[test]
    fn verify_rejects_extreme_negative_timestamp() {
        let payload = br#"{}"#;
        let now = 1_700_000_000;
        let header = format!("t={},v1={}", i64::MIN, "00".repeat(32));

        assert!(verify(payload, &header, "whsec_test", DEFAULT_TOLERANCE_SECS, now).is_err());
    }

    #[test]
    fn verify_accepts_second_v1_entry() {
        let payload = br#"{}"#;
        let now = 1_700_000_000;
        let header = format!(
            "t={},v1={},v1={}",
            now,
            "00".repeat(32),
            sign(payload, "whsec_test", now)
        );

        assert!(verify(payload, &header, "whsec_test", DEFAULT_TOLERANCE_SECS, now).is_ok());
    }
}
