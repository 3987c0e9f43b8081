use clap::Parser;
use isnad::db::Db;
use isnad::tree::build_tree;
use isnad::{store, Config};
use anyhow::Result;

#[derive(Parser, Debug)]
#[command(name = "tree")]
#[command(about = "Print persons grouped into generations of transmission")]
struct Args {
    /// Print the tree as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", "warn")
    ).init();

    let args = Args::parse();
    let config = Config::load()?;
    let db = Db::new(config.db_path());
    db.migrate(config.migrations_dir()).await?;

    let persons = store::list_persons(&db).await?;
    let transmissions = store::list_transmissions(&db).await?;
    let view = build_tree(&persons, &transmissions);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view);
    }

    Ok(())
}
