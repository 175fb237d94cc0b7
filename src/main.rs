//! Walks through the tree operations and prints the results.
//!
//! Any command line arguments are parsed as integers and used to build the first tree instead
//! of the default `5 3 8 30`. Set `RUST_LOG=trace` to watch the tree restructure itself.

use std::fmt::Display;

use anyhow::Context;
use log::info;

use bst::Tree;

fn print_values<'a, T, I>(values: I)
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for value in values {
        println!("{value}");
    }
}

fn print_tree<T: Display>(tree: &Tree<T>) {
    if tree.is_empty() {
        println!("Empty tree");
    } else {
        print_values(tree.in_order());
    }
}

fn print_tree_pre<T: Display>(tree: &Tree<T>) {
    if tree.is_empty() {
        println!("Empty tree");
    } else {
        print_values(tree.pre_order());
    }
}

fn rotation_line<T: Display>(direction: &str, value: T, rotated: bool) -> String {
    if rotated {
        format!("Rotate {direction} around {value}:")
    } else {
        format!("Rotate {direction} around {value}: nothing to rotate")
    }
}

fn parse_args() -> anyhow::Result<Option<Vec<i64>>> {
    let values = std::env::args()
        .skip(1)
        .map(|arg| {
            arg.parse::<i64>()
                .with_context(|| format!("`{arg}` is not an integer"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok((!values.is_empty()).then_some(values))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let values = parse_args()?.unwrap_or_else(|| vec![5, 3, 8, 30]);
    info!("building first tree from {values:?}");
    let t: Tree<i64> = values.iter().copied().collect();

    if t.is_full() {
        println!("FULL");
    } else {
        println!("NOT FULL");
    }

    print_tree(&t);
    println!("Node count: {}", t.node_count());
    println!("Height: {}", t.height());
    println!("Min: {}", t.find_min()?);
    println!("Max: {}", t.find_max()?);

    let t1: Tree<i64> = [15, 13, 18, 130].into_iter().collect();
    if t.compare_structure(&t1) {
        println!("Trees have the same structure");
    } else {
        println!("Trees DO NOT have the same structure");
    }

    let t2: Tree<i64> = [5, 3, 8, 30].into_iter().collect();
    if t.equals(&t2) {
        println!("Trees are identical");
    } else {
        println!("Trees are NOT identical");
    }

    let t3 = t.copy();
    print_tree(&t3);

    let mut t4: Tree<i64> = [100, 50, 40, 45, 150].into_iter().collect();

    println!("Print per levels:");
    print_values(t4.level_order());
    for (depth, level) in t4.levels().iter().enumerate() {
        let level: Vec<String> = level.iter().map(ToString::to_string).collect();
        println!("  level {depth}: {}", level.join(" "));
    }

    println!("Original tree:");
    print_tree(&t4);
    let t5 = t4.mirror();
    println!("Mirror tree:");
    print_tree(&t5);

    if t4.is_mirror(&t5) {
        println!("Trees are mirrors");
    } else {
        println!("Trees are NOT mirrors");
    }

    println!("Original tree:");
    print_tree_pre(&t4);
    println!("{}", rotation_line("right", 50, t4.rotate_right(&50)));
    print_tree_pre(&t4);
    // 50 came down with no right child, so this one changes nothing.
    println!("{}", rotation_line("left", 50, t4.rotate_left(&50)));
    print_tree_pre(&t4);
    // 40 went up in 50's place, so rotating left around it puts 50 back.
    println!("{}", rotation_line("left", 40, t4.rotate_left(&40)));
    print_tree_pre(&t4);

    Ok(())
}
