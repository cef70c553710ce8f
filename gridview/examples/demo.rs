//! Scripted walkthrough of the grid: load a JSON dataset, then drive the
//! three interactions the way a host would and print the tree after each.

use std::fs::File;

use gridview::{Column, DetailTemplate, FileSource, GridController};
use simplelog::{Config, LevelFilter, WriteLogger};
use viewtree::{Content, Direction, Element};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let log_file = File::create("gridview-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut grid = GridController::new(vec![
        Column::new("id").width(5),
        Column::new("firstName").width(12),
        Column::new("lastName").width(12),
        Column::new("email").width(26),
        Column::new("phone").width(15),
    ])
    .with_detail_template(
        DetailTemplate::new()
            .heading_field("firstName")
            .heading_field("lastName")
            .field("Description", "description")
            .field("Street", "address.streetAddress")
            .field("City", "address.city")
            .field("State", "address.state")
            .field("Zip", "address.zip"),
    );

    let source = FileSource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/examples/users.json"));
    match grid.load(&source).await {
        Ok(count) => println!("loaded {count} rows\n"),
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    }

    println!("-- initial mount --");
    mount(grid.tree());

    grid.on_header_activate("lastName");
    println!("\n-- sorted by lastName --");
    mount(grid.tree());

    grid.on_search_submit("ann");
    println!("\n-- searched for \"ann\" --");
    mount(grid.tree());

    grid.on_row_activate(2);
    println!("\n-- expanded the visible row --");
    mount(grid.tree());
}

/// A stand-in host: flatten the display tree to stdout, honoring hidden
/// flags and printing row-directed elements on a single line.
fn mount(root: &Element) {
    print_element(root, 0);
}

fn print_element(element: &Element, depth: usize) {
    if element.hidden {
        return;
    }

    let indent = "  ".repeat(depth);
    match &element.content {
        Content::Text(text) => println!("{indent}{text}"),
        Content::TextInput { value, placeholder } => {
            let shown = if value.is_empty() {
                placeholder.as_deref().unwrap_or("")
            } else {
                value
            };
            println!("{indent}[{shown}]");
        }
        Content::Children(children) if element.direction == Direction::Row => {
            let line: String = children
                .iter()
                .filter(|c| !c.hidden)
                .map(inline_text)
                .collect();
            println!("{indent}{line}");
        }
        Content::Children(children) => {
            for child in children {
                print_element(child, depth + 1);
            }
        }
        Content::None => {}
    }
}

fn inline_text(element: &Element) -> String {
    match &element.content {
        Content::Text(text) => text.clone(),
        Content::TextInput { value, placeholder } => {
            let shown = if value.is_empty() {
                placeholder.as_deref().unwrap_or("")
            } else {
                value
            };
            format!("[{shown}] ")
        }
        Content::Children(children) => children.iter().map(inline_text).collect(),
        Content::None => String::new(),
    }
}
