use clap::{Args, Parser, Subcommand};
use mm_strassen::SizePolicy;

#[derive(Parser)]
#[command(name = "mm")]
#[command(author, version, about = "Strassen matrix multiplication demo")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Multiply [[1,2],[3,4]] by [[5,6],[7,8]] and print the product
    Example,

    /// Multiply two random integer matrices
    Multiply(MultiplyArgs),
}

/// Unset tuning flags fall back to MM_SIZE_POLICY, MM_LEAF_SIZE and
/// MM_PARALLEL_DEPTH, then to the library defaults.
#[derive(Args, Debug)]
pub struct MultiplyArgs {
    /// Matrix dimension
    #[arg(short = 'n', long)]
    pub size: usize,

    /// RNG seed for the operands
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Smallest element value (inclusive)
    #[arg(long, default_value_t = -100, allow_hyphen_values = true)]
    pub low: i64,

    /// Largest element value (exclusive)
    #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
    pub high: i64,

    /// Handling of non-power-of-two sizes: reject or pad
    #[arg(long)]
    pub policy: Option<SizePolicy>,

    /// Dimension at or below which the naive loop is used
    #[arg(long)]
    pub leaf_size: Option<usize>,

    /// Recursion depth down to which products run in parallel
    #[arg(long)]
    pub parallel_depth: Option<usize>,

    /// Check the product against the naive triple loop
    #[arg(long)]
    pub verify: bool,

    /// Print operands and product
    #[arg(long)]
    pub print: bool,
}
