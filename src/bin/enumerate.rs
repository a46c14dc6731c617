use clap::{Parser, Subcommand};

use combinatorics::{
    Combinations, CombinationsWithReplacement, Error, Permutations, Projected, TupleGenerator,
};

/// Prints the cardinality and every index tuple of a combinatorial family.
#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    family: Family,
}

#[derive(Subcommand, Clone)]
enum Family {
    /// k-combinations of n positions, strictly increasing tuples
    Combinations {
        n: usize,
        k: usize,
        /// Comma-separated items to project tuples onto, n entries
        #[arg(long, value_delimiter = ',')]
        items: Option<Vec<String>>,
    },
    /// k-combinations with replacement, non-decreasing tuples
    CombinationsWithReplacement {
        n: usize,
        k: usize,
        #[arg(long, value_delimiter = ',')]
        items: Option<Vec<String>>,
    },
    /// k-permutations of n positions, ordered tuples of distinct indices
    Permutations {
        n: usize,
        k: usize,
        #[arg(long, value_delimiter = ',')]
        items: Option<Vec<String>>,
    },
}

fn main() -> Result<(), Error> {
    match Args::parse().family {
        Family::Combinations { n, k, items } => run(Combinations::new(n, k)?, items),
        Family::CombinationsWithReplacement { n, k, items } => {
            run(CombinationsWithReplacement::new(n, k)?, items)
        }
        Family::Permutations { n, k, items } => run(Permutations::new(n, k)?, items),
    }
}

fn run(mut generator: impl TupleGenerator, items: Option<Vec<String>>) -> Result<(), Error> {
    println!("{} tuples", generator.total_count());

    match items {
        Some(items) => {
            let mut projected = Projected::new(generator, &items)?;
            while projected.advance() {
                println!("{}", projected.items().join(","));
            }
        }
        None => {
            while generator.advance() {
                let tuple: Vec<String> = generator.indices().iter().map(usize::to_string).collect();
                println!("{}", tuple.join(","));
            }
        }
    }
    Ok(())
}
