//! Integration tests for the processor module
//!
//! Runs the complete pipeline over temporary input directories.
