//! Demonstrates using AnySet as a service locator / dependency injection container.
//!
//! AnySet fits DI because:
//! - Type IS the key - no string keys to manage
//! - Only one instance per type - natural singleton pattern
//! - Services need not be Clone - the set owns them
//!
//! Run with: cargo run --example service_locator

use anyset::{AnySet, SetError};

fn main() -> Result<(), SetError> {
    let mut services = AnySet::new();

    // Register services - type is the key, no strings needed
    services.insert(DatabaseConfig {
        host: "localhost".to_string(),
        port: 5432,
        database: "myapp".to_string(),
    });

    services.insert(AppConfig {
        name: "MyApp".to_string(),
        debug: true,
        max_connections: 100,
    });

    services.emplace::<Logger, _>("app");

    // Trait objects are stored under their boxed type
    services.insert::<Box<dyn Notifier>>(Box::new(ConsoleNotifier));

    {
        let user_service = UserService::new(&services);
        user_service.create_user("alice")?;
        user_service.create_user("bob")?;

        let order_service = OrderService::new(&services);
        order_service.create_order("alice", "Widget")?;
    }

    // Services can be modified
    services.with_mut(|cfg: &mut AppConfig| {
        cfg.debug = false;
        println!("Debug mode disabled");
    })?;

    // Swap the notifier for one that stays quiet
    services.insert::<Box<dyn Notifier>>(Box::new(SilentNotifier));
    OrderService::new(&services).create_order("bob", "Gadget")?;

    println!("\nFinal configuration:");
    let cfg = services.get_ref::<AppConfig>()?;
    println!("  App: {}", cfg.name);
    println!("  Debug: {}", cfg.debug);
    println!("  Max connections: {}", cfg.max_connections);

    let db = services.get_ref::<DatabaseConfig>()?;
    println!("  Database: {}:{}/{}", db.host, db.port, db.database);

    // An unregistered service is reported, not silently ignored
    if let Err(e) = services.get_ref::<MetricsSink>() {
        println!("  Metrics: {}", e);
    }

    Ok(())
}

// ============================================================================
// Configuration types - stored in AnySet
// ============================================================================

#[derive(Debug)]
struct DatabaseConfig {
    host: String,
    port: u16,
    database: String,
}

#[derive(Debug)]
struct AppConfig {
    name: String,
    debug: bool,
    max_connections: u32,
}

#[derive(Debug)]
struct Logger {
    prefix: String,
}

impl From<&str> for Logger {
    fn from(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }
}

impl Logger {
    fn log(&self, message: &str) {
        println!("[{}] {}", self.prefix, message);
    }
}

trait Notifier {
    fn notify(&self, message: &str);
}

struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("  -> notify: {}", message);
    }
}

struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _message: &str) {}
}

#[allow(dead_code)]
struct MetricsSink;

// ============================================================================
// Services that consume dependencies from AnySet
// ============================================================================

struct UserService<'a> {
    services: &'a AnySet,
}

impl<'a> UserService<'a> {
    fn new(services: &'a AnySet) -> Self {
        Self { services }
    }

    fn create_user(&self, username: &str) -> Result<(), SetError> {
        self.services
            .get_ref::<Logger>()?
            .log(&format!("Creating user: {}", username));

        let db = self.services.get_ref::<DatabaseConfig>()?;
        println!(
            "  -> Would insert into {}.users on {}:{}",
            db.database, db.host, db.port
        );

        if self.services.get_ref::<AppConfig>()?.debug {
            println!("  -> [DEBUG] User {} created successfully", username);
        }

        Ok(())
    }
}

struct OrderService<'a> {
    services: &'a AnySet,
}

impl<'a> OrderService<'a> {
    fn new(services: &'a AnySet) -> Self {
        Self { services }
    }

    fn create_order(&self, username: &str, item: &str) -> Result<(), SetError> {
        self.services
            .get_ref::<Logger>()?
            .log(&format!("Creating order for {}: {}", username, item));

        let max = self.services.get_ref::<AppConfig>()?.max_connections;
        println!("  -> Using connection pool (max: {})", max);

        self.services
            .get_ref::<Box<dyn Notifier>>()?
            .notify(&format!("{} ordered {}", username, item));

        Ok(())
    }
}
