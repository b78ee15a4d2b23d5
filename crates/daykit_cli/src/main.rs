//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `daykit_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use daykit_core::{
    default_log_level, init_logging, open_store_in_memory, Catalog, CartStore, TodoStore,
};

fn main() {
    // .env is optional; the weather client validates its own config later.
    dotenvy::dotenv().ok();
    if let Err(err) = init_logging(default_log_level(), "logs") {
        eprintln!("logging init skipped: {err}");
    }

    println!("daykit_core version={}", daykit_core::core_version());

    let todo_storage = match open_store_in_memory() {
        Ok(storage) => storage,
        Err(err) => {
            eprintln!("storage bootstrap failed: {err}");
            std::process::exit(1);
        }
    };
    let mut todos = TodoStore::open(todo_storage);
    let _ = todos.add("smoke-test todo", None);
    println!("todos count={}", todos.counts().all);

    let cart_storage = match open_store_in_memory() {
        Ok(storage) => storage,
        Err(err) => {
            eprintln!("storage bootstrap failed: {err}");
            std::process::exit(1);
        }
    };
    let catalog = Catalog::demo();
    let mut cart = CartStore::open(cart_storage);
    if let Some(product) = catalog.products().first() {
        cart.add_item(product, 1);
    }
    let summary = cart.summary();
    println!(
        "cart items={} subtotal={} total={}",
        summary.item_count, summary.subtotal, summary.total
    );
}
