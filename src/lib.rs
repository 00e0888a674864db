//! # RSSched Rust Backend
//!
//! Analysis backend for rolling stock scheduling results.
//!
//! This crate provides a Rust-based backend for the RSSched Analyzer, the
//! dashboard used to inspect vehicle-scheduling solver runs. Given a request
//! (problem instance: depots, vehicle types, routes, maintenance constraints)
//! and a response (the computed schedule assigning vehicles to service trips,
//! dead-head trips, and maintenance slots), it reconstructs depot occupancy
//! over time, aggregates fleet-wide loads, and produces the chart datasets the
//! frontend renders. The backend exposes a REST API via Axum.
//!
//! ## Features
//!
//! - **Typed Instance Model**: request/response structures matching the
//!   solver's JSON wire format
//! - **Depot Loads**: per-vehicle-type occupancy reconstruction and a
//!   fleet-wide cumulative load series, checked against declared capacity
//! - **Fleet Analysis**: Gantt data, vehicle utilization, active-event
//!   histograms, and fleet efficiency per vehicle type
//! - **Instance Store**: in-memory store for uploaded instances with
//!   content-hash deduplication
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: typed request/response/instance structures
//! - [`services`]: pure analysis functions producing the chart datasets
//! - [`routes`]: route-specific data types
//! - [`store`]: instance storage with a global accessor
//! - [`http`]: Axum-based HTTP server and request handlers
//!

pub mod api;

pub mod config;
pub mod models;

pub mod routes;

pub mod services;

pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
