//! Output format tests

mod treeviz;
