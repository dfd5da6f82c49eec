use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::api::CohortServer;
use crate::config::ServerConfig;
use crate::entity::{Project, WeeklySchedule};
use crate::error::Result;
use crate::storage::MemStore;

/// Install the stderr subscriber. RUST_LOG wins over `fallback`.
fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // A second init (tests, embedding) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

pub fn handle_serve(host: String, port: u16, no_seed: bool, log_filter: String) -> Result<()> {
    let config = ServerConfig {
        host,
        port,
        seed: !no_seed,
        log_filter,
    };
    init_tracing(&config.log_filter);

    let addr = config.socket_addr()?;
    let store = if config.seed {
        MemStore::seeded()
    } else {
        MemStore::new()
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(CohortServer::new(store).serve(addr))
}

#[derive(Serialize)]
struct SeededProject {
    project: Project,
    schedule: Vec<WeeklySchedule>,
}

pub fn handle_seed(json: bool) -> Result<()> {
    let store = MemStore::seeded();
    let mut projects = store.list_projects();
    projects.sort_by_key(|p| p.theme);

    if json {
        let catalog: Vec<SeededProject> = projects
            .into_iter()
            .map(|project| SeededProject {
                schedule: store.list_schedule(&project.id),
                project,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    for p in &projects {
        let weeks = store.list_schedule(&p.id).len();
        println!("Theme {}: {} ({} weeks)", p.theme, p.title, weeks);
    }

    let stats = store.stats();
    println!(
        "\n{} projects, {} schedule items, {} professors, {} notifications",
        stats.projects, stats.schedule_items, stats.professors, stats.notifications
    );
    Ok(())
}
