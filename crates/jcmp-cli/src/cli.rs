use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "jcmp",
    about = "Structural JSON comparison with tree-shaped diffs",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two JSON documents and print a diff tree
    Compare(CompareArgs),
    /// Serve the comparison API over HTTP
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// Actual JSON: an inline literal, or a file path starting with /, ./, or ../
    #[arg(long)]
    pub actual: String,

    /// Expected JSON: an inline literal, or a file path starting with /, ./, or ../
    #[arg(long)]
    pub expected: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind: String,

    /// Serve plain-text responses without ANSI color
    #[arg(long)]
    pub no_color: bool,
}
