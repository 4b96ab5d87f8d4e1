use std::env;
use std::error::Error;
use std::fs;

use shelf_alloc::export::Export;
use shelf_alloc::{
    books_from_json, starter_books, starter_shelves, Library, PlacementLog, Statistics,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut books_path: Option<String> = None;
    let mut export_format: Option<String> = None;
    let mut export_path: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--export" => {
                export_format = args.next();
                export_path = args.next();
                if export_format.is_none() || export_path.is_none() {
                    return Err(
                        "Usage: shelf-alloc [books.json] [--export csv|md|json <path>]".into()
                    );
                }
            }
            _ => books_path = Some(arg),
        }
    }

    let books = match &books_path {
        Some(path) => books_from_json(&fs::read_to_string(path)?)?,
        None => starter_books(),
    };

    let mut library = Library::new(starter_shelves());
    let mut log = PlacementLog::new();

    for book in &books {
        let outcome = library.add_book(book)?;
        log.record(book, outcome);
        println!("{}: {}", book.title, outcome);
    }

    println!();
    println!("placed: {} of {}", log.placed_count(), log.records().len());
    for shelf in library.shelves() {
        println!(
            "{}: {} books, {} of {} pages used",
            shelf.genre(),
            shelf.books().len(),
            shelf.pages_used(),
            shelf.size()
        );
    }
    println!("avg shelf fill: {:.2}", library.avg());

    if let (Some(format), Some(path)) = (export_format, export_path) {
        let shelves = library.shelves();
        let content = match format.as_str() {
            "csv" => shelves.to_csv()?,
            "md" => shelves.to_md()?,
            "json" => shelves.to_json()?,
            other => return Err(format!("unknown export format: {}", other).into()),
        };
        fs::write(&path, content)?;
        println!("shelves exported to {}", path);
    }

    Ok(())
}
