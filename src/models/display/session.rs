//! Session display model

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::{Formattable, json};
use crate::session::SessionSnapshot;

/// What `whoami` reports: the session plus where it lives
#[derive(Debug, Clone, Serialize)]
pub struct SessionDisplay {
    #[serde(flatten)]
    pub session: SessionSnapshot,

    /// Local storage database
    pub storage: String,

    /// API base URL requests go to
    pub api_url: String,
}

impl SessionDisplay {
    fn pretty(&self) -> String {
        let mut out = String::new();

        match &self.session.identity {
            Some(identity) => {
                out.push_str(&format!("Hello, {}\n\n", identity.name.bold()));
                out.push_str(&format!("{} Logged in\n", "✓".green()));
                out.push_str(&format!("  ID:    {}\n", identity.id));
                if let Some(email) = &identity.email {
                    out.push_str(&format!("  Email: {}\n", email));
                }
            }
            None => {
                out.push_str(&format!("{} Not logged in\n", "✗".red()));
                out.push_str(&format!(
                    "  → Run {} or {}\n",
                    "eventbooker login".cyan(),
                    "eventbooker register".cyan()
                ));
            }
        }

        out.push('\n');
        out.push_str(&format!("API:     {}\n", self.api_url.cyan()));
        out.push_str(&format!("Storage: {}", self.storage.dimmed()));
        out
    }
}

impl Formattable for SessionDisplay {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => json::format_json(self),
            OutputFormat::Pretty | OutputFormat::Table => Ok(self.pretty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Identity;

    fn display(identity: Option<Identity>) -> SessionDisplay {
        SessionDisplay {
            session: SessionSnapshot {
                is_authenticated: identity.is_some(),
                identity,
                is_loading: false,
            },
            storage: "/tmp/eventbooker/storage.db".to_string(),
            api_url: "http://localhost:3000".to_string(),
        }
    }

    #[test]
    fn test_pretty_logged_in() {
        let output = display(Some(Identity {
            id: "user-1".to_string(),
            email: Some("ada@example.com".to_string()),
            name: "Ada".to_string(),
        }))
        .format(OutputFormat::Pretty)
        .unwrap();

        assert!(output.contains("Hello, "));
        assert!(output.contains("Ada"));
        assert!(output.contains("ada@example.com"));
        assert!(output.contains("user-1"));
    }

    #[test]
    fn test_pretty_anonymous() {
        let output = display(None).format(OutputFormat::Pretty).unwrap();

        assert!(output.contains("Not logged in"));
        assert!(output.contains("localhost:3000"));
    }

    #[test]
    fn test_json_flattens_snapshot() {
        let output = display(None).format(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["data"]["is_authenticated"], false);
        assert_eq!(value["data"]["is_loading"], false);
        assert!(value["data"]["identity"].is_null());
        assert_eq!(value["data"]["api_url"], "http://localhost:3000");
    }
}
