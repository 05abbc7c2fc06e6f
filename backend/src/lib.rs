//! # BRI Rust Backend
//!
//! Analytics engine for the Bike Rental Insights (BRI) dashboard.
//!
//! This crate provides a Rust-based backend for the BRI system, serving
//! date-range-filtered aggregations over a daily bike-rental dataset. The
//! dataset is loaded from CSV once at startup; the backend exposes a REST
//! API via Axum for the dashboard frontend.
//!
//! ## Features
//!
//! - **Data Loading**: Parse daily rental records from CSV format
//! - **Monthly Trend**: Resample daily records into per-month order totals
//! - **Category Rankings**: Rank seasons and weather conditions by distinct
//!   rental days
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`data`]: Dataset loading, checksumming, and date-window slicing
//! - [`services`]: Pure aggregation functions behind each visualization
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific data types
//!
//! ## Concurrency
//!
//! The dataset is immutable after startup and shared across handlers via
//! `Arc`. Every request recomputes its derived tables from scratch; nothing
//! is cached or mutated between requests.

pub mod api;

pub mod config;
pub mod data;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
