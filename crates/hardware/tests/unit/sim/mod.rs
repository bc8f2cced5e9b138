//! Unit tests for trace parsing and replay.
