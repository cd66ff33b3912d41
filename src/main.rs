use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

use user_registrations::modules::users::adapters::outbound::registered_users_store::RegisteredUsersStore;
use user_registrations::modules::users::form::controller::FormController;
use user_registrations::modules::users::form::state::Tab;
use user_registrations::modules::users::use_cases::list_registered_users::projection::UserRow;
use user_registrations::modules::users::use_cases::register_user::draft::Draft;
use user_registrations::shared::core::clock::SystemClock;
use user_registrations::shared::infrastructure::key_value_store::file::FileKeyValueStore;
use user_registrations::shell::cli::{Cli, Commands};
use user_registrations::shell::config::Config;
use user_registrations::shell::render::{render_notification, render_table};

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?.with_storage_file(cli.storage_file);
    tracing::debug!(storage_file = %config.storage_file.display(), "opening store");

    let store = RegisteredUsersStore::new(FileKeyValueStore::new(config.storage_file));
    let mut controller = FormController::start(store, SystemClock);

    if let Some(notification) = controller.notification() {
        println!("{}", render_notification(notification));
    }

    let exit = match cli.command {
        Commands::Register { name, email, phone } => {
            let result = controller.submit(Draft::new(name, email, phone));
            if let Some(notification) = controller.notification() {
                println!("{}", render_notification(notification));
            }
            match result {
                Ok(record) => {
                    print!("{}", render_table(&[UserRow::from(&record)]));
                    ExitCode::SUCCESS
                }
                Err(_) => ExitCode::FAILURE,
            }
        }
        Commands::List => {
            controller.switch_tab(Tab::RegisteredUsers);
            print!("{}", render_table(&controller.rows()));
            ExitCode::SUCCESS
        }
    };

    Ok(exit)
}
