use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use crate::models::{ContactRecord, ContentKind, QrContent, SecurityKind, WifiNetwork};

/// Command-line options for qrcody.
#[derive(Parser, Debug)]
#[command(name = "qrcody", version, about = "Generate, style and keep a history of QR codes")]
pub struct Cli {
    /// Directory holding the history database and settings.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the payload for some content
    Encode {
        #[command(subcommand)]
        content: ContentArgs,
    },
    /// Decode a payload of the given kind and print its fields as JSON
    Decode { kind: ContentKind, payload: String },
    /// Encode content and append it to the history
    Save {
        /// Display name; defaults to the payload
        #[arg(long, default_value = "")]
        name: String,
        /// Background color as #RRGGBB, overriding the default style
        #[arg(long)]
        background: Option<String>,
        /// Image file to place in the centre of the code
        #[arg(long)]
        logo: Option<PathBuf>,
        #[command(subcommand)]
        content: ContentArgs,
    },
    /// List saved QR codes, newest first
    History,
    /// Show a saved QR code with its decoded fields
    Show { id: Uuid },
    /// Remove a saved QR code
    Delete { id: Uuid },
    /// Render a saved QR code to a PNG file
    Export {
        id: Uuid,
        path: PathBuf,
        #[arg(long, default_value_t = 800)]
        size: u32,
    },
    /// Show or change settings
    Config {
        /// Keep at most this many history entries (0 = unlimited)
        #[arg(long)]
        history_limit: Option<usize>,
        /// Security assumed for Wi-Fi payloads without a type segment
        #[arg(long, value_enum)]
        wifi_default_security: Option<SecurityArg>,
        /// Default background color as #RRGGBB
        #[arg(long)]
        background: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ContentArgs {
    Url {
        url: String,
    },
    Text {
        text: String,
    },
    Wifi {
        #[arg(long)]
        ssid: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, value_enum, default_value_t = SecurityArg::Wpa)]
        security: SecurityArg,
        #[arg(long)]
        hidden: bool,
    },
    Contact {
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityArg {
    Wpa,
    Wep,
    Nopass,
}

impl From<SecurityArg> for SecurityKind {
    fn from(value: SecurityArg) -> Self {
        match value {
            SecurityArg::Wpa => SecurityKind::Wpa,
            SecurityArg::Wep => SecurityKind::Wep,
            SecurityArg::Nopass => SecurityKind::NoPassword,
        }
    }
}

impl From<ContentArgs> for QrContent {
    fn from(args: ContentArgs) -> Self {
        match args {
            ContentArgs::Url { url } => QrContent::Url(url),
            ContentArgs::Text { text } => QrContent::Text(text),
            ContentArgs::Wifi {
                ssid,
                password,
                security,
                hidden,
            } => QrContent::Wifi(WifiNetwork {
                ssid,
                password,
                is_hidden: hidden,
                security_type: security.into(),
            }),
            ContentArgs::Contact {
                first_name,
                last_name,
                email,
                phone,
            } => QrContent::Contact(ContactRecord {
                first_name,
                last_name,
                email,
                phone,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wifi_encode() {
        let cli = Cli::try_parse_from([
            "qrcody", "encode", "wifi", "--ssid", "Home", "--password", "secret1",
        ])
        .unwrap();
        let Command::Encode { content } = cli.command else {
            panic!("expected encode");
        };
        assert_eq!(
            QrContent::from(content),
            QrContent::Wifi(WifiNetwork {
                ssid: "Home".into(),
                password: "secret1".into(),
                is_hidden: false,
                security_type: SecurityKind::Wpa,
            })
        );
    }

    #[test]
    fn parses_decode_kind() {
        let cli = Cli::try_parse_from(["qrcody", "decode", "contact", "FN:Solo"]).unwrap();
        let Command::Decode { kind, payload } = cli.command else {
            panic!("expected decode");
        };
        assert_eq!(kind, ContentKind::Contact);
        assert_eq!(payload, "FN:Solo");

        assert!(Cli::try_parse_from(["qrcody", "decode", "vcard", "x"]).is_err());
    }

    #[test]
    fn parses_save_with_options() {
        let cli = Cli::try_parse_from([
            "qrcody",
            "--data-dir",
            "/tmp/q",
            "save",
            "--name",
            "Site",
            "--background",
            "#FFFFFF",
            "url",
            "https://example.com",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/q")));
        let Command::Save {
            name,
            background,
            logo,
            content,
        } = cli.command
        else {
            panic!("expected save");
        };
        assert_eq!(name, "Site");
        assert_eq!(background.as_deref(), Some("#FFFFFF"));
        assert!(logo.is_none());
        assert_eq!(
            QrContent::from(content),
            QrContent::Url("https://example.com".into())
        );
    }

    #[test]
    fn nopass_maps_to_no_password() {
        assert_eq!(SecurityKind::from(SecurityArg::Nopass), SecurityKind::NoPassword);
    }
}
