//! Macros shared between the crates of this workspace.

mod meta;
