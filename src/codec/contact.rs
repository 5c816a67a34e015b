//! Minimal vCard 3.0 payloads: formatted name, phone and email.
//!
//! Lines are joined with `\n` and carry no trailing newline. Values are not
//! escaped or folded. Decoding splits on `\n` only, so CRLF input leaves a
//! trailing `\r` on each value.

use crate::models::ContactRecord;

const HEADER: [&str; 2] = ["BEGIN:VCARD", "VERSION:3.0"];
const FOOTER: &str = "END:VCARD";

type LineSetter = fn(&mut ContactRecord, &str);

const LINE_TAGS: [(&str, LineSetter); 3] = [
    ("FN:", set_name),
    ("TEL:", set_phone),
    ("EMAIL:", set_email),
];

/// First word is the given name, everything after the first space the
/// family name.
fn set_name(contact: &mut ContactRecord, value: &str) {
    let (first, last) = value.split_once(' ').unwrap_or((value, ""));
    contact.first_name = first.to_string();
    contact.last_name = last.to_string();
}

fn set_phone(contact: &mut ContactRecord, value: &str) {
    contact.phone = value.to_string();
}

fn set_email(contact: &mut ContactRecord, value: &str) {
    contact.email = value.to_string();
}

pub fn encode(contact: &ContactRecord) -> String {
    let mut lines: Vec<String> = HEADER.iter().map(|line| line.to_string()).collect();

    lines.push(format!("FN:{}", contact.full_name()));

    if !contact.phone.is_empty() {
        lines.push(format!("TEL:{}", contact.phone));
    }

    if !contact.email.is_empty() {
        lines.push(format!("EMAIL:{}", contact.email));
    }

    lines.push(FOOTER.to_string());
    lines.join("\n")
}

pub fn decode(payload: &str) -> ContactRecord {
    let mut contact = ContactRecord::default();

    for line in payload.split('\n') {
        if let Some((setter, value)) = LINE_TAGS
            .iter()
            .find_map(|(tag, setter)| line.strip_prefix(tag).map(|value| (setter, value)))
        {
            setter(&mut contact, value);
        }
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(first: &str, last: &str, email: &str, phone: &str) -> ContactRecord {
        ContactRecord {
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    #[test]
    fn encodes_name_and_phone() {
        let payload = encode(&contact("Ada", "Lovelace", "", "555-1234"));
        assert_eq!(
            payload,
            "BEGIN:VCARD\nVERSION:3.0\nFN:Ada Lovelace\nTEL:555-1234\nEND:VCARD"
        );
    }

    #[test]
    fn phone_precedes_email() {
        let payload = encode(&contact("Ada", "Lovelace", "ada@example.com", "555"));
        assert_eq!(
            payload,
            "BEGIN:VCARD\nVERSION:3.0\nFN:Ada Lovelace\nTEL:555\nEMAIL:ada@example.com\nEND:VCARD"
        );
    }

    #[test]
    fn empty_contact_still_has_name_line() {
        assert_eq!(
            encode(&ContactRecord::default()),
            "BEGIN:VCARD\nVERSION:3.0\nFN:\nEND:VCARD"
        );
    }

    #[test]
    fn name_is_trimmed_when_a_part_is_missing() {
        assert!(encode(&contact("Cher", "", "", "")).contains("\nFN:Cher\n"));
        assert!(encode(&contact("", "Smith", "", "")).contains("\nFN:Smith\n"));
    }

    #[test]
    fn decodes_single_word_name() {
        let decoded = decode("FN:Solo\nEND:VCARD");
        assert_eq!(decoded, contact("Solo", "", "", ""));
    }

    #[test]
    fn keeps_multi_word_family_name() {
        let decoded = decode("BEGIN:VCARD\nFN:Ludwig van Beethoven\nEND:VCARD");
        assert_eq!(decoded.first_name, "Ludwig");
        assert_eq!(decoded.last_name, "van Beethoven");
    }

    #[test]
    fn name_splits_at_the_first_space_only() {
        let decoded = decode("FN:Ada  Lovelace");
        assert_eq!(decoded.first_name, "Ada");
        assert_eq!(decoded.last_name, " Lovelace");
    }

    #[test]
    fn carriage_returns_stay_in_values() {
        let decoded = decode("FN:Ada Lovelace\r\nTEL:1\r\nEND:VCARD");
        assert_eq!(decoded.first_name, "Ada");
        assert_eq!(decoded.last_name, "Lovelace\r");
        assert_eq!(decoded.phone, "1\r");
    }

    #[test]
    fn values_keep_colons_after_prefix() {
        let decoded = decode("TEL:tel:+1-555\nEMAIL:mailto:a@b.c");
        assert_eq!(decoded.phone, "tel:+1-555");
        assert_eq!(decoded.email, "mailto:a@b.c");
    }

    #[test]
    fn ignores_unknown_lines_and_missing_fields() {
        let decoded = decode("BEGIN:VCARD\nVERSION:3.0\nORG:Analytical\nFN:\nEND:VCARD");
        assert_eq!(decoded, ContactRecord::default());
        assert_eq!(decode(""), ContactRecord::default());
    }

    #[test]
    fn round_trips_contacts() {
        let cases = [
            contact("Ada", "Lovelace", "ada@example.com", "555-1234"),
            contact("Grace", "", "", "+1 202 555 0100"),
            contact("Ludwig", "van Beethoven", "lvb@example.com", ""),
            contact("", "", "", ""),
        ];
        for original in cases {
            assert_eq!(decode(&encode(&original)), original);
        }
    }

    #[test]
    fn newline_in_value_is_not_escaped() {
        let payload = encode(&contact("Ada", "", "", "555\nEMAIL:x@y.z"));
        assert_eq!(decode(&payload).email, "x@y.z");
    }
}
