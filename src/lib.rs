//! # Campus Scheduler Backend
//!
//! Course timetable scheduling engine for campus management.
//!
//! This crate provides a Rust backend for campus course scheduling. It parses
//! classroom and section catalogs, generates conflict-free weekly timetables
//! with a backtracking solver, and manages the draft / approve / reject batch
//! lifecycle. The backend exposes a REST API via Axum for the frontend.
//!
//! ## Features
//!
//! - **Catalog Loading**: Parse classroom and course section catalogs from JSON
//! - **Timetable Generation**: Deterministic backtracking search over rooms and weekly slots
//! - **Conflict Rules**: Half-open intervals, no classroom or instructor double booking
//! - **Batch Lifecycle**: Draft batches approved, rejected, or archived as one unit
//! - **Analytics**: Classroom and weekday utilization over the approved timetable
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Entities, identifiers, and Data Transfer Objects (DTOs)
//! - [`db`]: Repository pattern, storage backends, and the service layer
//! - [`scheduler`]: Candidate enumeration and the backtracking solver
//! - [`services`]: Cross-cutting services such as generation locks
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific data types
//!

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod scheduler;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
