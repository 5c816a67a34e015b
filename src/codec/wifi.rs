//! `WIFI:` payloads, the MeCard-style format QR scanners use to join a network.
//!
//! Grammar: `WIFI:S:<ssid>[;T:<WPA|WEP>;P:<password>][;H:true];`
//!
//! Field values are written verbatim. A `;` inside an ssid or password is not
//! escaped and splits the field on decode.

use serde::{Deserialize, Serialize};

use crate::models::{SecurityKind, WifiNetwork};

const SCHEME: &str = "WIFI:";

/// Knobs for [`decode_with`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct WifiDecodeOptions {
    /// Security assumed when the payload has no recognised `T:` segment.
    pub default_security: SecurityKind,
}

type SegmentSetter = fn(&mut WifiNetwork, &str);

/// Tag handlers, tried in order against each `;`-separated component.
const SEGMENT_TAGS: [(&str, SegmentSetter); 4] = [
    ("S:", set_ssid),
    ("P:", set_password),
    ("T:", set_security),
    ("H:", set_hidden),
];

fn set_ssid(network: &mut WifiNetwork, value: &str) {
    network.ssid = value.to_string();
}

fn set_password(network: &mut WifiNetwork, value: &str) {
    network.password = value.to_string();
}

fn set_security(network: &mut WifiNetwork, value: &str) {
    if let Some(security) = SecurityKind::from_code(value) {
        network.security_type = security;
    }
}

fn set_hidden(network: &mut WifiNetwork, value: &str) {
    network.is_hidden = value == "true";
}

pub fn encode(network: &WifiNetwork) -> String {
    let mut segments = vec![format!("S:{}", network.ssid)];

    if network.security_type != SecurityKind::NoPassword {
        segments.push(format!("T:{}", network.security_type.code()));
        segments.push(format!("P:{}", network.password));
    }

    if network.is_hidden {
        segments.push("H:true".to_string());
    }

    format!("{SCHEME}{};", segments.join(";"))
}

/// Best-effort parse; unknown or malformed segments are skipped and missing
/// ones keep their defaults. A payload without `T:` decodes as WPA.
pub fn decode(payload: &str) -> WifiNetwork {
    decode_with(payload, &WifiDecodeOptions::default())
}

pub fn decode_with(payload: &str, options: &WifiDecodeOptions) -> WifiNetwork {
    let mut network = WifiNetwork {
        security_type: options.default_security,
        ..WifiNetwork::default()
    };

    let body = payload.strip_prefix(SCHEME).unwrap_or(payload);
    for component in body.split(';') {
        if let Some((setter, value)) = SEGMENT_TAGS
            .iter()
            .find_map(|(tag, setter)| component.strip_prefix(tag).map(|value| (setter, value)))
        {
            setter(&mut network, value);
        }
    }

    network
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(ssid: &str, password: &str, is_hidden: bool, security_type: SecurityKind) -> WifiNetwork {
        WifiNetwork {
            ssid: ssid.into(),
            password: password.into(),
            is_hidden,
            security_type,
        }
    }

    #[test]
    fn encodes_wpa_network() {
        let payload = encode(&network("Home", "secret1", false, SecurityKind::Wpa));
        assert_eq!(payload, "WIFI:S:Home;T:WPA;P:secret1;");
    }

    #[test]
    fn encodes_hidden_wep_network() {
        let payload = encode(&network("Lab", "abc", true, SecurityKind::Wep));
        assert_eq!(payload, "WIFI:S:Lab;T:WEP;P:abc;H:true;");
    }

    #[test]
    fn open_network_omits_type_and_password() {
        let payload = encode(&network("Cafe", "ignored", false, SecurityKind::NoPassword));
        assert_eq!(payload, "WIFI:S:Cafe;");
        assert!(!payload.contains("T:"));
        assert!(!payload.contains("P:"));

        let hidden = encode(&network("Cafe", "", true, SecurityKind::NoPassword));
        assert_eq!(hidden, "WIFI:S:Cafe;H:true;");
    }

    #[test]
    fn empty_password_is_still_emitted() {
        let payload = encode(&network("Home", "", false, SecurityKind::Wpa));
        assert_eq!(payload, "WIFI:S:Home;T:WPA;P:;");
        assert_eq!(decode(&payload), network("Home", "", false, SecurityKind::Wpa));
    }

    #[test]
    fn empty_network_encodes_minimal_payload() {
        assert_eq!(encode(&WifiNetwork::default()), "WIFI:S:;T:WPA;P:;");
    }

    #[test]
    fn round_trips_secured_networks() {
        for security in [SecurityKind::Wpa, SecurityKind::Wep] {
            for hidden in [false, true] {
                let original = network("Office 5G", "p@ss:word", hidden, security);
                assert_eq!(decode(&encode(&original)), original);
            }
        }
    }

    #[test]
    fn decodes_guest_network_with_default_security() {
        let decoded = decode("WIFI:S:Guest;H:true;");
        assert_eq!(decoded, network("Guest", "", true, SecurityKind::Wpa));
    }

    #[test]
    fn decodes_segments_in_any_order() {
        let decoded = decode("WIFI:P:pw;H:false;T:WEP;S:Net;;");
        assert_eq!(decoded, network("Net", "pw", false, SecurityKind::Wep));
    }

    #[test]
    fn tolerates_missing_terminator_and_scheme() {
        assert_eq!(decode("WIFI:S:Home;T:WPA;P:x"), network("Home", "x", false, SecurityKind::Wpa));
        assert_eq!(decode("S:Home;T:nopass"), network("Home", "", false, SecurityKind::NoPassword));
    }

    #[test]
    fn unknown_security_code_keeps_default() {
        let decoded = decode("WIFI:S:Home;T:WPA3;P:x;");
        assert_eq!(decoded.security_type, SecurityKind::Wpa);

        let options = WifiDecodeOptions {
            default_security: SecurityKind::NoPassword,
        };
        let decoded = decode_with("WIFI:S:Home;T:SAE;", &options);
        assert_eq!(decoded.security_type, SecurityKind::NoPassword);
    }

    #[test]
    fn default_security_option_applies_only_without_type() {
        let options = WifiDecodeOptions {
            default_security: SecurityKind::NoPassword,
        };
        assert_eq!(
            decode_with("WIFI:S:Cafe;", &options).security_type,
            SecurityKind::NoPassword
        );
        assert_eq!(
            decode_with("WIFI:S:Home;T:WEP;P:x;", &options).security_type,
            SecurityKind::Wep
        );
    }

    #[test]
    fn ignores_unknown_segments_and_garbage() {
        let decoded = decode("WIFI:S:Home;X:1;garbage;;P:pw;");
        assert_eq!(decoded, network("Home", "pw", false, SecurityKind::Wpa));
        assert_eq!(decode(""), WifiNetwork::default());
    }

    #[test]
    fn hidden_flag_requires_literal_true() {
        assert!(!decode("WIFI:S:a;H:TRUE;").is_hidden);
        assert!(!decode("WIFI:S:a;H:1;").is_hidden);
        assert!(decode("WIFI:S:a;H:true;").is_hidden);
    }

    #[test]
    fn decodes_legacy_leading_separator() {
        let decoded = decode("WIFI:;S:Old;T:WPA;P:pw;;");
        assert_eq!(decoded, network("Old", "pw", false, SecurityKind::Wpa));
    }

    #[test]
    fn delimiters_inside_values_are_not_escaped() {
        let original = network("My;Net", "pa;ss", false, SecurityKind::Wpa);
        let payload = encode(&original);
        assert_eq!(payload, "WIFI:S:My;Net;T:WPA;P:pa;ss;");

        let decoded = decode(&payload);
        assert_eq!(decoded.ssid, "My");
        assert_eq!(decoded.password, "pa");
    }
}
