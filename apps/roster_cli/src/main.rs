use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use employees_api::HttpEmployeeFetcher;
use selection_cache::SqliteSelectionCache;
use selection_core::{AppState, SelectionCache, SelectionFacade, SelectionScope};
use shared::domain::{Employee, EmployeeId};
use tracing::warn;

mod config;

#[derive(Parser, Debug)]
struct Cli {
    /// Overrides the employees service root from roster.toml / env.
    #[arg(long)]
    api_url: Option<String>,
    /// Overrides the cache database url from roster.toml / env.
    #[arg(long)]
    cache_database_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the roster, apply toggles, and print the resulting state.
    Load {
        /// Employee ids to toggle into the active selection.
        #[arg(long = "toggle")]
        toggle: Vec<i64>,
        /// Employee ids to toggle out of the active selection.
        #[arg(long = "untoggle")]
        untoggle: Vec<i64>,
        /// Persist the resulting active selection snapshot.
        #[arg(long)]
        save_selection: bool,
    },
    /// Print the persisted selection snapshot.
    ShowCached,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();

    let mut settings = config::load_settings();
    if let Some(api_url) = cli.api_url {
        settings.api_url = api_url;
    }
    if let Some(url) = cli.cache_database_url {
        settings.cache_database_url = url;
    }

    let cache = SqliteSelectionCache::new(&settings.cache_database_url).await?;

    match cli.command {
        Command::Load {
            toggle,
            untoggle,
            save_selection,
        } => {
            let fetcher = Arc::new(HttpEmployeeFetcher::new(&settings.api_url)?);
            let scope = SelectionScope::mount();
            let facade = SelectionFacade::new(scope.dispatch_handle(), fetcher, &cache).await;
            facade.load_employees().await?;

            let state_handle = scope.state_handle();
            for id in toggle {
                match find_employee(&state_handle.state()?, id) {
                    Some(employee) => facade.toggle_active(employee)?,
                    None => warn!("no employee with id={id}; skipping toggle"),
                }
            }
            for id in untoggle {
                // Removal matches by id alone, so a bare record is enough.
                facade.toggle_not_active(Employee::new(id))?;
            }

            let state = state_handle.state()?;
            if save_selection {
                cache.write(&state.active_list).await?;
            }
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Command::ShowCached => {
            let cached = cache.read().await?;
            println!("{}", serde_json::to_string_pretty(&cached)?);
        }
    }

    Ok(())
}

fn find_employee(state: &AppState, id: i64) -> Option<Employee> {
    state
        .employees_list
        .iter()
        .find(|employee| employee.id == EmployeeId(id))
        .cloned()
}
