//! HTTP redirect endpoint
//!
//! `GET|HEAD /r/{code}` resolves a short code, `GET /` sends visitors to the
//! configured default URL and `GET /health` reports store status.

pub mod services;
