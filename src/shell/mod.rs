// Composition root for the demo service.
//
// Responsibilities
// - Read config from environment.
// - Build the shared application state.
// - Expose the HTTP router to the binary and to integration tests.

pub mod config;
pub mod http;
pub mod state;
