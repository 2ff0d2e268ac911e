//! `avl-demo`: build an AVL tree from integer keys, print a traversal and
//! look keys up.
//!
//! Usage:
//!   avl-demo [KEYS]... [--search KEY]... [--order pre|in] [--tree] [--json]
//!
//! Without arguments it inserts `10 20 30 40 50 25` and searches for `25`.
//! Log output is controlled by `RUST_LOG` and goes to stderr.

use std::process;

use avl_tree::AvlTree;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Order {
    Pre,
    In,
}

#[derive(Debug, Parser)]
#[command(name = "avl-demo", about = "Insert keys into an AVL tree and search it")]
struct Args {
    /// Keys to insert, in order.
    #[arg(default_values_t = [10, 20, 30, 40, 50, 25], allow_negative_numbers = true)]
    keys: Vec<i64>,

    /// Key to look up; may be repeated.
    #[arg(short, long = "search", default_values_t = [25], allow_negative_numbers = true)]
    search: Vec<i64>,

    /// Traversal to print.
    #[arg(long, value_enum, default_value_t = Order::Pre)]
    order: Order,

    /// Also print the tree structure.
    #[arg(long)]
    tree: bool,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Lookup {
    key: i64,
    found: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    order: &'static str,
    keys: Vec<i64>,
    height: usize,
    len: usize,
    lookups: Vec<Lookup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tree: Option<&'a avl_tree::AvlNode<i64>>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "starting");

    let mut tree = AvlTree::new();
    for &key in &args.keys {
        if !tree.insert(key) {
            debug!(key, "duplicate ignored");
        }
    }

    if let Err(e) = tree.assert_valid() {
        eprintln!("{e}");
        process::exit(1);
    }

    let (order, keys): (&'static str, Vec<i64>) = match args.order {
        Order::Pre => ("pre", tree.pre_order().copied().collect()),
        Order::In => ("in", tree.iter().copied().collect()),
    };
    let lookups: Vec<Lookup> = args
        .search
        .iter()
        .map(|&key| Lookup {
            key,
            found: tree.search(&key).is_some(),
        })
        .collect();

    if args.json {
        let report = Report {
            order,
            keys,
            height: tree.height(),
            len: tree.len(),
            lookups,
            tree: if args.tree { tree.root() } else { None },
        };
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
        return;
    }

    println!("{order}-order traversal of the AVL tree:");
    let line: Vec<String> = keys.iter().map(i64::to_string).collect();
    println!("{}", line.join(" "));
    if args.tree {
        println!();
        println!("{}", tree.print());
    }

    for lookup in &lookups {
        println!();
        println!("Searching for {}...", lookup.key);
        if lookup.found {
            println!("Found {} in the tree.", lookup.key);
        } else {
            println!("{} is not in the tree.", lookup.key);
        }
    }
}
