pub mod bot;
pub mod sentry;
pub mod tracing;
