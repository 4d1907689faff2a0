// Not every utils is used in every test, so we allow dead code
#![allow(unused_imports, dead_code)]

mod failing_store;
mod test_setup;
pub use failing_store::*;
pub use test_setup::*;
