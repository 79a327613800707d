//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `portfolio_core` wiring end to end: open storage, bootstrap the
//!   profile, print the display projections.
//! - Use the database file given as the first argument, or an in-memory one.
//! - Write rolling logs to the absolute directory given as the second argument.

use portfolio_core::db::{open_db, open_db_in_memory};
use portfolio_core::{
    page_title, resume_data, visible_menu_sections, MenuSection, ProfileStore,
    SqliteDocumentStore,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("portfolio_core ping={}", portfolio_core::ping());
    println!("portfolio_core version={}", portfolio_core::core_version());

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(log_dir) = args.get(1) {
        if let Err(err) = portfolio_core::init_logging(portfolio_core::default_log_level(), log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let conn = match args.first() {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    };
    let conn = match conn {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open database: {err}");
            return ExitCode::FAILURE;
        }
    };

    let docs = SqliteDocumentStore::new(&conn);
    let mut store = ProfileStore::new(&docs);
    store.process_remote_events();
    if let Some(error) = store.last_error() {
        eprintln!("profile unavailable: {error}");
        return ExitCode::FAILURE;
    }

    let profile = store.current_profile();
    if let Some(title) = page_title(profile) {
        println!("title={title}");
    }
    let menu: Vec<&str> = visible_menu_sections(profile)
        .into_iter()
        .map(MenuSection::label)
        .collect();
    println!("menu={}", menu.join(","));

    match serde_json::to_string_pretty(&resume_data(profile)) {
        Ok(resume) => println!("{resume}"),
        Err(err) => {
            eprintln!("failed to render resume: {err}");
            return ExitCode::FAILURE;
        }
    }

    store.unsubscribe();
    ExitCode::SUCCESS
}
