//! GoodFood Admin library.
//!
//! This crate provides the moderation panel as a library, allowing it to be
//! tested and reused.
//!
//! # Architecture
//!
//! Every data operation is a thin authenticated proxy to the platform
//! backend: the caller's bearer token travels in httpOnly cookies, handlers
//! attach it as an `Authorization` header, and backend responses are
//! normalized into a single `{data, pagination}` envelope. All business data
//! and authority lives in the backend; this service owns authorization
//! checks and response reshaping only.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod upstream;
