use isnad::db::Db;
use isnad::tree::build_tree;
use isnad::{store, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load()?;
    let db = Db::new(config.db_path());
    db.migrate(config.migrations_dir()).await?;

    let persons = store::list_persons(&db).await?;
    let transmissions = store::list_transmissions(&db).await?;
    let ijazas = store::list_ijazas(&db).await?;
    let view = build_tree(&persons, &transmissions);

    let placed: usize = view.generations.iter().map(|g| g.scholars.len()).sum();
    let with_ijaza = transmissions.iter().filter(|t| t.ijaza_id.is_some()).count();

    println!("\n=== Isnad Statistics ===\n");
    println!("{:-<40}", "");
    println!("{:<28} {:>10}", "Persons", view.stats.persons);
    println!("{:<28} {:>10}", "Transmissions", view.stats.transmissions);
    println!("{:<28} {:>10}", "  with an ijaza", with_ijaza);
    println!("{:<28} {:>10}", "Ijazas", ijazas.len());
    println!("{:<28} {:>10}", "Generations", view.stats.generations);
    println!("{:<28} {:>10}", "Persons outside the tree", persons.len().saturating_sub(placed));
    println!("{:-<40}", "");

    if !view.generations.is_empty() {
        println!("\nPersons per generation:\n");
        for tier in &view.generations {
            println!("  {:<6} {:>6}", tier.generation, tier.scholars.len());
        }
    }

    println!();

    Ok(())
}
