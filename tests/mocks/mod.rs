
// Re-export commonly used mocks
pub use clients::MockEnvClient;
