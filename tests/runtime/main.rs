//! Integration tests for Layer 3: Runtime
//!
//! Tests for command dispatch, sessions, and the REPL loop.

mod dispatch;
mod repl;
