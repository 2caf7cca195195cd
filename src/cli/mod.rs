//! CLI argument parsing

mod common;

use clap::Parser;
use std::path::PathBuf;

use crate::config::{api, credentials, defaults};
use crate::export::{Destination, ExportRequest};

pub use common::OutputFormat;

/// Prints out a list of users in the given GitHub organization
#[derive(Parser, Debug)]
#[command(name = "github-users")]
#[command(version)]
#[command(about = "Prints out a list of users in the given GitHub organization.")]
#[command(after_help = "Examples:
  If you want a quick list:
      github-users krux
  If you want it in CSV:
      github-users krux -f csv
  If you want it in a CSV file:
      github-users krux -f csv -o ~/tmp/users.csv
  If you want the user's location also:
      github-users krux -n name -n login -n location")]
pub struct Cli {
    /// Login of the organization (exact, case-sensitive match)
    #[arg(value_name = "ORG_NAME")]
    pub org_name: String,

    /// GitHub access token with the `read:org` scope
    #[arg(
        short = 't',
        long,
        env = credentials::TOKEN_ENV_VAR,
        hide_env_values = true
    )]
    pub github_token: String,

    /// The format in which you want the output
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Pprint)]
    pub output_format: OutputFormat,

    /// File to write the output to, overwritten if it exists (default: stdout)
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Profile field to export; repeat for more fields. Unknown fields are exported as empty strings
    #[arg(short = 'n', long, value_name = "FIELD", default_values = defaults::FIELD_NAMES)]
    pub field_names: Vec<String>,

    /// GitHub API base URL (GitHub Enterprise: https://<host>/api/v3)
    #[arg(long, env = credentials::API_URL_ENV_VAR, default_value = api::DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Number of member profiles fetched concurrently; output order is unchanged
    #[arg(
        short = 'j',
        long,
        default_value_t = defaults::PROFILE_PREFETCH,
        value_parser = clap::value_parser!(u8).range(1..=api::MAX_PROFILE_PREFETCH as i64)
    )]
    pub jobs: u8,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Do not show the progress spinner
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl Cli {
    /// Build the export request described by the arguments
    pub fn export_request(&self) -> ExportRequest {
        ExportRequest::new(&self.org_name)
            .with_fields(self.field_names.iter().cloned())
            .with_format(self.output_format)
            .with_destination(Destination::from_path(self.output.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["github-users", "acme", "-t", "token"]);
        assert_eq!(cli.org_name, "acme");
        assert_eq!(cli.github_token, "token");
        assert_eq!(cli.output_format, OutputFormat::Pprint);
        assert!(cli.output.is_none());
        assert_eq!(cli.field_names, vec!["name", "login"]);
        assert_eq!(cli.api_url, api::DEFAULT_BASE_URL);
        assert_eq!(cli.jobs, 1);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_cli_with_format_and_output() {
        let cli = Cli::parse_from([
            "github-users",
            "acme",
            "--github-token",
            "token",
            "-f",
            "csv",
            "-o",
            "users.csv",
        ]);
        assert_eq!(cli.output_format, OutputFormat::Csv);
        assert_eq!(cli.output, Some(PathBuf::from("users.csv")));
    }

    #[test]
    fn test_cli_repeated_field_names_replace_default() {
        let cli = Cli::parse_from([
            "github-users", "acme", "-t", "token", "-n", "login", "-n", "location", "-n", "login",
        ]);
        assert_eq!(cli.field_names, vec!["login", "location", "login"]);
    }

    #[test]
    fn test_cli_long_field_names() {
        let cli = Cli::parse_from([
            "github-users",
            "acme",
            "-t",
            "token",
            "--field-names",
            "email",
        ]);
        assert_eq!(cli.field_names, vec!["email"]);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["github-users", "acme", "-t", "token", "-f", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_org_name() {
        let result = Cli::try_parse_from(["github-users", "-t", "token"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_jobs_range() {
        let cli = Cli::parse_from(["github-users", "acme", "-t", "token", "-j", "8"]);
        assert_eq!(cli.jobs, 8);

        assert!(Cli::try_parse_from(["github-users", "acme", "-t", "token", "-j", "0"]).is_err());
        assert!(Cli::try_parse_from(["github-users", "acme", "-t", "token", "-j", "17"]).is_err());
    }

    #[test]
    fn test_export_request_from_cli() {
        let cli = Cli::parse_from([
            "github-users",
            "acme",
            "-t",
            "token",
            "-f",
            "json",
            "-o",
            "out.json",
            "-n",
            "login",
        ]);
        let request = cli.export_request();
        assert_eq!(request.org_name, "acme");
        assert_eq!(request.format, OutputFormat::Json);
        assert_eq!(request.field_names, vec!["login"]);
        assert_eq!(
            request.destination,
            Destination::File(PathBuf::from("out.json"))
        );
    }

    #[test]
    fn test_export_request_defaults_to_stdout() {
        let cli = Cli::parse_from(["github-users", "acme", "-t", "token"]);
        assert_eq!(cli.export_request().destination, Destination::Stdout);
    }
}
