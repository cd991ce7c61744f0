// Composition root for the booking service.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate the MessageBird client and wire it into the booking handler.
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
