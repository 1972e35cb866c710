//! Radio station admin API client.
//!
//! A thin async client over the admin backend's station endpoints, plus a
//! fake backend for exercising it without a live server.

pub mod stations;
