use std::sync::Arc;

use anyhow::Context;

use fitsearch::config::AppConfig;
use fitsearch::core::paginate::parse_page;
use fitsearch::core::service::SearchService;
use fitsearch::core::taxonomy::TaxonomyRegistry;
use fitsearch::database::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = fitsearch::core::logging::init();
    tracing::info!("fitsearch v{} starting", fitsearch::VERSION);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let query = args.first().cloned();
    let page = parse_page(args.get(1).map(String::as_str));

    let config = AppConfig::load();
    let database = Database::connect(&config.storage)
        .await
        .context("failed to connect to exercise storage")?;

    let service = SearchService::new(
        Arc::new(database),
        Arc::new(TaxonomyRegistry::new()),
        &config.search,
        config.storage.table.clone(),
    );

    let response = service.search(query.as_deref(), page).await;

    if let Some(error) = &response.error {
        eprintln!("{error}");
        std::process::exit(1);
    }

    println!(
        "Page {} — showing {} of {} result(s)",
        response.page,
        response.exercises.len(),
        response.total
    );
    if !response.filter.is_empty() {
        println!(
            "Filter: level={} equipment={} muscle={}",
            response.filter.level.as_deref().unwrap_or("-"),
            response.filter.equipment.as_deref().unwrap_or("-"),
            response.filter.muscle.as_deref().unwrap_or("-"),
        );
    }

    for exercise in &response.exercises {
        println!("\n{} ({})", exercise.name, exercise.category);
        if !exercise.instructions.is_empty() {
            println!("{}", exercise.instructions);
        }
        for image in &exercise.images {
            println!("  image: {image}");
        }
    }

    Ok(())
}
