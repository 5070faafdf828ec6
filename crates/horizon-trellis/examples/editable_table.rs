//! An editable three-column table backed by a `RowModel`.
//!
//! Run with: `cargo run --example editable_table`
//!
//! The "view" here is a dumb printer driven entirely by model signals,
//! the same wiring a real table widget would use.

use std::sync::Arc;

use horizon_trellis::prelude::*;

#[derive(Clone, Debug)]
struct TargetRow {
    enabled: bool,
    host: String,
    note: String,
}

fn print_table(model: &RowModel<TargetRow>) {
    println!("  {:<3} {:<20} NOTE", "ON", "HOST");
    for row in model.rows().iter() {
        println!(
            "  {:<3} {:<20} {}",
            if row.enabled { "x" } else { "-" },
            row.host,
            row.note
        );
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt::init();

    let model = Arc::new(RowModel::new(vec![
        TargetRow {
            enabled: true,
            host: "dev.internal".to_string(),
            note: "staging".to_string(),
        },
        TargetRow {
            enabled: false,
            host: "www.example.com".to_string(),
            note: String::new(),
        },
    ]));

    {
        let m = model.clone();
        model.signals().rows_inserted.connect(move |&(first, _)| {
            println!("-> row {first} inserted: {}", m.get(first).unwrap().host);
        });
    }
    {
        let m = model.clone();
        model.signals().rows_updated.connect(move |&(first, _)| {
            println!("-> row {first} updated: {:?}", *m.get(first).unwrap());
        });
    }
    model.signals().rows_removed.connect(|&(first, _)| {
        println!("-> row {first} removed");
    });

    print_table(&model);

    model.push(TargetRow {
        enabled: true,
        host: "api.internal".to_string(),
        note: "added last".to_string(),
    });

    // Cell-level edits: toggle the checkbox column, rewrite the note column.
    model.modify(1, |row| row.enabled = true).unwrap();
    model
        .modify(0, |row| row.note = "promoted".to_string())
        .unwrap();

    model.remove(2).unwrap();

    print_table(&model);
}
