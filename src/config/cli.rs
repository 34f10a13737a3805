use crate::config::toml_config::TomlConfig;
use crate::config::SiteConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Loads the portfolio document and talks to the portfolio backend")]
pub struct Cli {
    #[command(flatten)]
    pub site: SiteConfig,

    /// TOML file that replaces the backend settings above
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the page document (backend data merged over the bundled copy)
    Load {
        /// Print the whole document as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Probe backend availability
    Health,
    /// Show a single project from the backend
    Project { id: String },
    /// List received contact messages
    Messages {
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
    /// Send a message through the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
}

impl Cli {
    /// Settings in effect: the TOML file when given, otherwise the flags.
    pub fn site_config(&self) -> Result<SiteConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                Ok(TomlConfig::from_file(path)?.into_site_config())
            }
            None => Ok(self.site.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_contact_command() {
        let cli = Cli::try_parse_from([
            "portfolio-site",
            "--backend-url",
            "http://example.com/api",
            "contact",
            "--name",
            "A",
            "--email",
            "a@b.com",
            "--subject",
            "S",
            "--message",
            "M",
        ])
        .unwrap();

        assert_eq!(cli.site.backend_url, "http://example.com/api");
        match cli.command {
            Command::Contact {
                name,
                email,
                subject,
                message,
            } => {
                assert_eq!(
                    (name.as_str(), email.as_str(), subject.as_str(), message.as_str()),
                    ("A", "a@b.com", "S", "M")
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_load_defaults() {
        let cli = Cli::try_parse_from(["portfolio-site", "load", "--json"]).unwrap();

        assert!(matches!(cli.command, Command::Load { json: true }));
        assert_eq!(cli.site.request_timeout_seconds, 10);
        assert_eq!(cli.site_config().unwrap(), cli.site);
    }
}
