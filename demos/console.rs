//! Inserts a few values of different types and reads them back.
//!
//! Run with: cargo run --example console

use anyset::AnySet;

fn main() {
    let mut set = AnySet::new();
    set.insert(2);
    set.insert(5.5);

    let hello = String::from("hello");
    set.insert(hello);

    if let Some(a) = set.get::<i32>() {
        println!("{}", a);
    }

    if let Some(b) = set.get::<f64>() {
        println!("{}", b);
    }

    if let Some(c) = set.get::<String>() {
        println!("{}", c);
    }

    // Nothing of type bool was stored
    match set.get_ref::<bool>() {
        Ok(flag) => println!("{}", flag),
        Err(e) => eprintln!("{}", e),
    }
}
