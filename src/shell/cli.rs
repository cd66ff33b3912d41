use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "user_registrations")]
#[command(about = "Register users and list them from a local store")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Storage file (overrides USER_REGISTRATIONS_STORAGE_FILE)
    #[arg(long, global = true)]
    pub storage_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// Register a new user (name and email are required)
    Register {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,
    },

    /// List registered users
    List,
}

#[cfg(test)]
mod cli_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_a_registration() {
        let cli = Cli::try_parse_from([
            "user_registrations",
            "register",
            "--name",
            "Ana",
            "--email",
            "ana@x.com",
            "--storage-file",
            "users.json",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Commands::Register {
                name: "Ana".into(),
                email: "ana@x.com".into(),
                phone: "".into(),
            }
        );
        assert_eq!(cli.storage_file, Some(PathBuf::from("users.json")));
    }

    #[rstest]
    fn it_should_leave_missing_fields_to_the_form() {
        let cli = Cli::try_parse_from(["user_registrations", "register", "--email", "b@x.com"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Register { ref name, .. } if name.is_empty()));
    }

    #[rstest]
    fn it_should_parse_the_listing() {
        let cli = Cli::try_parse_from(["user_registrations", "list"]).unwrap();
        assert_eq!(cli.command, Commands::List);
        assert_eq!(cli.storage_file, None);
    }
}
