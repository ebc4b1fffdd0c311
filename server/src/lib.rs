// Life of a request:
// 1. GET / comes in with optional s, p, o and start query parameters
// 2. Each position parameter is typed by shape: unbound / IRI / literal
// 3. The backend answers one bounded, counted page of matching facts
// 4. The composer wraps the page in hydra/void navigation metadata
// 5. The document goes out as Turtle, cacheable by URI
//
// System components:
//  - Identifier grammar and triple patterns (types)
//  - Pluggable fact stores with fixed-size pagination (backend)
//  - Hypermedia composer and Turtle writer (fragment, turtle, vocab)

pub mod backend;
pub mod config;
mod e2e_tests;
pub mod fragment;
pub mod server;
#[cfg(test)]
mod testing;
mod turtle;
pub mod types;
pub mod vocab;

pub use server::FragmentServer;
