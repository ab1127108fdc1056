//! Checks on the layout of the test suite itself

mod coverage;
