use algolab::apps;
use clap::{Parser, Subcommand};
use std::io;

#[derive(Parser)]
#[command(name = "algolab", version, about = "Classic lab exercises as interactive console menus")]
struct Cli {
    #[command(subcommand)]
    tool: Tool,
}

#[derive(Subcommand)]
enum Tool {
    /// Matrix operations menu (add, multiply, determinant, inverse, ...)
    Matrix,
    /// Sort/search menu over an integer array (four sorts, two searches)
    Array,
    /// Reduced sort/search menu (bubble, insertion, binary search)
    ArrayBasic,
    /// Fixed-capacity student record manager
    Students,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    match cli.tool {
        Tool::Matrix => apps::matrix::run(stdin.lock(), stdout.lock()),
        Tool::Array => apps::array::run(stdin.lock(), stdout.lock()),
        Tool::ArrayBasic => apps::array_basic::run(stdin.lock(), stdout.lock()),
        Tool::Students => apps::students::run(stdin.lock(), stdout.lock()),
    }
}
