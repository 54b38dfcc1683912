//! The `Inventory` map and its `merge` operation are the kernel of the
//! application. The `args` module parses the command line, the `io` module
//! moves item lists to and from CSV files, and the `table` module prints the
//! inventory as a right-justified table.
//!
//! Current Limitations:
//! * Import files are read whole and flattened into memory, so a huge import
//!   file means a huge allocation. Streaming merges are out of scope.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod inventory;
pub mod io;
pub mod table;
