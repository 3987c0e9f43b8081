use clap::Parser;
use isnad::db::Db;
use isnad::tree::{format_chain, label_chain};
use isnad::{find_shortest_chain, store, Config, IsnadError};
use anyhow::Result;

#[derive(Parser, Debug)]
#[command(name = "chain")]
#[command(about = "Print the shortest chain of transmission between two persons")]
struct Args {
    /// Person id at one end of the chain
    #[arg(long)]
    from: String,

    /// Person id at the other end
    #[arg(long)]
    to: String,

    /// Print the chain as JSON
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
    let (from, to) = (args.from.trim(), args.to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(IsnadError::InvalidInput("--from and --to must not be empty".to_string()).into());
    }

    let config = Config::load()?;
    let db = Db::new(config.db_path());
    db.migrate(config.migrations_dir()).await?;

    let edges = store::load_edges(&db).await?;
    let persons = store::list_persons(&db).await?;
    log::debug!("Loaded {} persons, {} transmissions", persons.len(), edges.len());

    let chain = find_shortest_chain(from, to, &edges).ok_or_else(|| IsnadError::ChainNotFound {
        from: from.to_string(),
        to: to.to_string(),
    })?;
    let links = label_chain(&chain, &persons);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&links)?);
    } else {
        println!("{}", format_chain(&links));
        println!("{} narrators, {} transmissions", links.len(), links.len() - 1);
    }

    Ok(())
}
