#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for the imbalance reporting service.
///
/// The settlement data model is created by a fetcher, validated once at
/// ingestion and then only read. The metric types are plain values produced
/// by the metrics engine and consumed by the handlers and report renderers.
pub mod models;

/// Interface traits for the imbalance reporting service.
///
/// These are the "ports" adapters plug into: a settlement data provider, a
/// source of the current time and a report renderer. Handlers depend only on
/// these traits, so providers can be swapped and tests can pin the clock.
pub mod ports;

/// UK business-day arithmetic.
pub mod calendar;
