use isnad::Config;
use isnad::db::{Db, migrate};
use isnad::http::HttpServer;
use clap::{Parser, Subcommand};
use anyhow::Result;

#[derive(Parser, Debug)]
#[command(name = "isnad")]
#[command(about = "Track chains of transmission between scholars", version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API
    Serve,
    /// Apply migrations and verify the database schema (default)
    Verify,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", config.isnad.log_level.as_str())
    ).init();

    // One handle for the whole process; handlers share it through router state.
    let db = Db::new(config.db_path());
    db.migrate(config.migrations_dir()).await?;
    log::info!("Database initialized at {}", config.db_path().display());

    match args.command.unwrap_or(Command::Verify) {
        Command::Serve => run_http_server(db, config).await?,
        Command::Verify => run_schema_verification(&db).await?,
    }

    Ok(())
}

async fn run_http_server(db: Db, config: Config) -> Result<()> {
    log::info!("Starting Isnad HTTP server v{}", env!("CARGO_PKG_VERSION"));
    HttpServer::new(db, config).run().await?;
    Ok(())
}

async fn run_schema_verification(db: &Db) -> Result<()> {
    db.with_connection(|conn| {
        migrate::verify_schema(conn)?;
        let applied = migrate::get_applied_migrations(conn)?;
        log::info!("✓ {} migrations applied", applied.len());
        Ok(())
    }).await?;

    log::info!("✓ Database schema verification complete");
    Ok(())
}
