//! CLI argument definitions using clap.
//!
//! `inclist` takes no subcommand: invoked bare it scans the parent directory
//! for `.h` and `.cpp` files and prints the collected includes to stdout.

use std::path::PathBuf;

use clap::Parser;

use crate::collect::DEFAULT_ROOT;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory to scan recursively
    #[arg(default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// File extension to scan, without the dot (overrides config file)
    /// Can be specified multiple times: --ext h --ext cpp
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Glob pattern or root-relative path to skip (added to config file ignores)
    #[arg(long = "ignore", value_name = "GLOB")]
    pub ignores: Vec<String>,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Wrap the output in an include guard with this macro name
    #[arg(long, value_name = "NAME")]
    pub guard: Option<String>,

    /// Warn about unreadable files instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Ignore any .inclistrc.json file
    #[arg(long)]
    pub no_config: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
