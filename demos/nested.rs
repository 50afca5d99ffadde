//! Demonstrates an extensible record built from nested AnySets, and moving a
//! whole set at once.
//!
//! Run with: cargo run --example nested

use anyset::{AnySet, SetError};

struct Name(String);
struct Email(String);
struct Theme(&'static str);

/// An exclusive handle; neither Clone nor Copy
struct Session {
    token: u64,
}

impl Drop for Session {
    fn drop(&mut self) {
        println!("  (session {} closed)", self.token);
    }
}

fn main() -> Result<(), SetError> {
    let mut preferences = AnySet::new();
    preferences.insert(Theme("dark"));

    let mut user = AnySet::new();
    user.insert(Name("alice".to_string()));
    user.insert(Email("alice@example.com".to_string()));
    user.insert(Session { token: 1 });
    user.insert(preferences);

    println!("User record: {:?}", user);
    println!("  name: {}", user.get_ref::<Name>()?.0);
    println!("  email: {}", user.get_ref::<Email>()?.0);
    println!(
        "  theme: {}",
        user.get_ref::<AnySet>()?.get_ref::<Theme>()?.0
    );

    // Replacing the session drops the old one first
    println!("Rotating session:");
    user.insert(Session { token: 2 });

    // Nested values are mutable in place
    user.get_mut_ref::<AnySet>()?.insert(Theme("light"));
    println!(
        "  theme now: {}",
        user.get_ref::<AnySet>()?.get_ref::<Theme>()?.0
    );

    // Move the whole record; the old binding stays usable but empty
    let mut archived = AnySet::new();
    archived.assign_from(&mut user);
    println!("After move, live record has {} values", user.len());
    println!("Archived record: {:?}", archived);

    match user.get_ref::<Name>() {
        Ok(name) => println!("Unexpected name {}", name.0),
        Err(e) => println!("{}", e),
    }

    println!("Dropping archive:");
    drop(archived);

    Ok(())
}
