//! End to end export tests: raw batch input to document.

mod export;
