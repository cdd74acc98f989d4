//! HTTP surface for the app extraction service.
//!
//! One endpoint, `POST /api/extract`, mapping the extraction pipeline's
//! error taxonomy onto the HTTP contract. Configuration comes from the
//! environment and is threaded into the handler state; there are no globals.

pub mod config;
pub mod routes;
