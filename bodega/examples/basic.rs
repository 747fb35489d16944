//! Basic example of the bodega service container.

use bodega::prelude::*;
use std::sync::Arc;

// === Define your traits and types ===

trait Logger: Send + Sync {
    fn log(&self, msg: &str);
}

struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, msg: &str) {
        println!("[LOG] {msg}");
    }
}

struct Database {
    url: String,
    logger: Arc<dyn Logger>,
}

impl Database {
    fn query(&self, sql: &str) -> String {
        self.logger.log(&format!("Executing: {sql}"));
        format!("Results from {}", self.url)
    }
}

struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    fn find_user(&self, id: u64) -> String {
        self.db.query(&format!("SELECT * FROM users WHERE id = {id}"))
    }
}

// === A provider groups related services under explicit names ===

struct AppProvider;

impl ServiceProvider for AppProvider {
    fn provide(&self, id: &ServiceId, container: &Container) -> Option<Result<Service>> {
        match id.as_pascal() {
            "Logger" => Some(Ok(Service::from_arc(Arc::new(ConsoleLogger) as Arc<dyn Logger>))),
            "Database" => Some((|| {
                let url: String = container.parameter_as("database_url")?;
                let logger: Arc<dyn Logger> = container.resolve("logger")?;
                Ok(Service::new(Database { url, logger }))
            })()),
            _ => None,
        }
    }

    fn service_names(&self) -> Vec<&'static str> {
        vec!["logger", "database"]
    }

    fn declared_type(&self, id: &ServiceId) -> Option<&'static str> {
        (id.as_pascal() == "Logger").then_some("dyn Logger")
    }
}

fn main() -> Result<()> {
    // Initialize tracing (logging)
    tracing_subscriber::fmt()
        .with_env_filter("bodega=debug")
        .init();

    let container = Container::new();

    // Configuration parameters — a namespace of their own
    container.set_parameter("database_url", "postgres://localhost/myapp");
    container.set_parameter("debug", true);

    // Provider-backed services
    container.add_provider(AppProvider);

    // Factory-backed service, resolving its collaborator through the container
    container.set_factory("user_repository", |c: &Container| {
        let db: Arc<Database> = c.resolve("database")?;
        Ok(UserRepository { db })
    });

    println!("{container:?}");
    println!("available services: {:?}", container.service_ids());
    println!("logger type: {}", container.return_type("logger")?);

    // Nothing has been produced yet
    assert!(container.has("user_repository"));
    assert!(!container.initialized("user_repository"));

    // First access realizes the whole chain lazily
    let repo: Arc<UserRepository> = container.resolve("user_repository")?;
    println!("user 42: {}", repo.find_user(42));

    // Second access hits the cache — same instance
    let again: Arc<UserRepository> = container.resolve("user_repository")?;
    assert!(Arc::ptr_eq(&repo, &again));

    println!("debug mode: {}", container.parameter_as::<bool>("debug")?);
    println!("{container:?}");

    Ok(())
}
