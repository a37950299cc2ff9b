//! library_circulation - circulation desk walkthrough
//!
//! Seeds a small inventory, runs a few loans through the manager and prints
//! the resulting circulation journal as JSON.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_circulation::{
    Config, InMemoryUserDirectory, LibraryManager, TracingNotificationService,
};

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_circulation=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let config = Config::from_env()?;
    tracing::info!(environment = %config.environment, "Starting circulation walkthrough");

    let users = Arc::new(InMemoryUserDirectory::with_active(["alice", "bob"]));
    let mut library = LibraryManager::new(users.clone(), Arc::new(TracingNotificationService::new()))
        .with_fee_policy(config.fee_policy());

    library.add_book("dune", 2);
    library.add_book("emma", 1);

    library.borrow_book("dune", "alice");
    library.borrow_book("emma", "bob");
    library.borrow_book("emma", "alice");
    library.borrow_book("dune", "mallory");
    library.return_book("emma", "alice");
    library.return_book("emma", "bob");

    users.deactivate("bob");
    library.borrow_book("dune", "bob");

    for (days, bestseller, premium) in [(1, false, false), (5, true, false), (3, true, true)] {
        let fee = library.calculate_dynamic_late_fee(days, bestseller, premium)?;
        tracing::info!(
            overdue_days = days,
            bestseller = bestseller,
            premium = premium,
            fee = %fee,
            "Late fee quote"
        );
    }

    println!("{}", serde_json::to_string_pretty(library.journal())?);

    Ok(())
}
