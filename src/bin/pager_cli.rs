//! Simple CLI for exercising the pager.
//!
//! Usage:
//!   pager_cli <total_items> <page_size> <page_number> [command...]
//!
//! Commands run left to right against the same pager:
//!   next | previous | first | last
//!   forward <k> | backward <k> | goto <n>
//!   state   - print the pager state
//!   json    - print the pager as JSON
//!   items   - print the current page of 1..=total_items as JSON
//!
//! With no command the initial state is printed. Set `RUST_LOG=trace` to see
//! clamped moves.

use paging::{PagedList, Pager};
use std::env;
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        eprintln!("Usage: pager_cli <total_items> <page_size> <page_number> [command...]");
        eprintln!("Commands:");
        eprintln!("  next | previous | first | last - Move one step or to an end");
        eprintln!("  forward <k> | backward <k>     - Move k pages");
        eprintln!("  goto <n>                       - Move to page n");
        eprintln!("  state                          - Print the pager state");
        eprintln!("  json                           - Print the pager as JSON");
        eprintln!("  items                          - Print the current page as JSON");
        exit(1);
    }

    let total = parse_signed(&args[1], "total_items");
    let page_size = parse_signed(&args[2], "page_size");
    let page_number = parse_signed(&args[3], "page_number");

    let mut pager = match Pager::checked(page_number, page_size, total) {
        Ok(pager) => pager,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            exit(1);
        }
    };

    let mut commands = args[4..].iter();
    let mut printed = false;

    while let Some(command) = commands.next() {
        match command.as_str() {
            "next" => pager.next(),
            "previous" | "prev" => pager.previous(),
            "first" => pager.first(),
            "last" => pager.last(),
            "forward" => pager.move_forward(parse_count(commands.next(), "forward")),
            "backward" => pager.move_backward(parse_count(commands.next(), "backward")),
            "goto" => pager.go_to_page(parse_count(commands.next(), "goto")),
            "state" => {
                print_state(&pager);
                printed = true;
            }
            "json" => {
                match pager.to_json() {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("ERROR: {}", e);
                        exit(1);
                    }
                }
                printed = true;
            }
            "items" => {
                let source = 1..=pager.total_item_count();
                match PagedList::from_pager(source, &pager).and_then(|list| list.to_json()) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("ERROR: {}", e);
                        exit(1);
                    }
                }
                printed = true;
            }
            _ => {
                eprintln!("Unknown command: {}", command);
                exit(1);
            }
        }
    }

    if !printed {
        print_state(&pager);
    }
}

fn print_state(pager: &Pager) {
    println!("page_number: {}", pager.page_number());
    println!("page_size: {}", pager.page_size());
    println!("total_item_count: {}", pager.total_item_count());
    println!("page_count: {}", pager.page_count());
    println!("has_previous_page: {}", pager.has_previous_page());
    println!("has_next_page: {}", pager.has_next_page());
    println!("is_first_page: {}", pager.is_first_page());
    println!("is_last_page: {}", pager.is_last_page());
}

fn parse_signed(arg: &str, name: &str) -> i64 {
    match arg.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("ERROR: Invalid {}: {}", name, arg);
            exit(1);
        }
    }
}

fn parse_count(arg: Option<&String>, command: &str) -> usize {
    match arg.map(|s| s.parse()) {
        Some(Ok(n)) => n,
        Some(Err(_)) => {
            eprintln!("ERROR: Invalid count for {}", command);
            exit(1);
        }
        None => {
            eprintln!("Usage: pager_cli ... {} <n>", command);
            exit(1);
        }
    }
}
