//! Operational console: connects to the configured data store, mounts the
//! four entity modules, and prints a snapshot of every table. Doubles as a
//! smoke test that config, auth, and table access all work.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tracing::{error, info};

use service::cars::crew_names;
use service::cars::Cars;
use service::crew::Crew;
use service::packages::Packages;
use service::services::Services;
use service::TableState;
use store::{DataStore, RestStore};

fn report<E>(label: &str, state: &TableState<E>, line: impl Fn(&E) -> String) {
    match &state.error {
        Some(err) => println!("{label}: ERROR: {err}"),
        None => {
            println!("{label} ({} rows)", state.rows.len());
            for row in &state.rows {
                println!("  - {}", line(row));
            }
        }
    }
}

async fn run() -> Result<()> {
    let cfg = configs::AppConfig::load_and_validate()?;
    info!(store = %cfg.data_store.url, "connecting to data store");
    let db: Arc<dyn DataStore> = Arc::new(RestStore::new(cfg.data_store.url, cfg.data_store.api_key));

    let services = Services::mount(db.clone()).await;
    let crew = Crew::mount(db.clone()).await;
    let packages = Packages::mount(db.clone()).await;
    let cars = Cars::mount(db).await;

    report("services", &services.state().await, |s| {
        format!("{} (${:.2})", s.name, s.price)
    });
    report("crew_members", &crew.state().await, |m| {
        let role = m.role.as_deref().unwrap_or("-");
        let active = if m.is_active() { "active" } else { "inactive" };
        format!("{} [{role}, {active}]", m.name)
    });
    report("service_packages", &packages.state().await, |p| {
        let count = p.service_ids.as_deref().map(|ids| ids.len()).unwrap_or(0);
        format!("{} ({count} services included)", p.name)
    });

    let roster = crew.rows().await;
    report("cars", &cars.state().await, |c| {
        let assigned = crew_names(c, &roster).join(", ");
        format!("{} {} [{}] crew: {}", c.plate, c.model, c.status, if assigned.is_empty() { "-".into() } else { assigned })
    });

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_default();
    info!(service = "console", version = env!("CARGO_PKG_VERSION"), "starting");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "console failed");
            ExitCode::FAILURE
        }
    }
}
