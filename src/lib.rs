//! Inclist - umbrella include collector for C/C++ source trees
//!
//! Inclist walks a directory tree, picks up every `#include <...>` line in
//! `.h` and `.cpp` files, and prints the unique header names as a single
//! case-insensitively sorted include list, ready to paste into a
//! precompiled header such as `stable.h`.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, running, output)
//! - `collect`: Traversal, include matching and the sorted header set
//! - `config`: Configuration file loading and validation

pub mod cli;
pub mod collect;
pub mod config;
