// tests/unit/mod.rs
