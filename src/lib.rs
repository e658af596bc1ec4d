// Library root - layers wired together by the binary in main.rs
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
