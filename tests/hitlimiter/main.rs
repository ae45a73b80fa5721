// tests/hitlimiter/main.rs

// test modules
mod concurrency_tests;

// Re-export common test utilities
pub use fixtures::test_clock::TestClock;
