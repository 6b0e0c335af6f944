// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Hypertrophy Engine
//!
//! A training periodization and recommendation engine for hypertrophy
//! programs. Given a history of workout logs, weekly wellness check-ins,
//! per-muscle volume ranges, and prior mesocycle outcomes, the engine
//! computes a readiness score, per-muscle volume recommendations, a complete
//! next-mesocycle setup with confidence-graded suggestions, and effectiveness
//! summaries that tune how assertive future suggestions are.
//!
//! ## Features
//!
//! - **Readiness scoring**: weighted 0-100 composite from wellness check-ins
//! - **Volume recommendations**: per-muscle increase/hold/reduce/deload
//!   decisions anchored to MEV/MRV landmarks
//! - **Smart cycle presets**: full next-cycle setup derived from miss rates,
//!   over-rep patterns, and historical suggestion effectiveness
//! - **Program construction**: split templates, round-robin exercise
//!   placement, and per-day set prescriptions
//! - **Effectiveness feedback**: immutable end-of-cycle summaries feed the
//!   next cycle's suggestion confidence
//!
//! ## Architecture
//!
//! The engine is a pure, synchronous computation over an in-memory
//! [`models::DataSnapshot`]: no I/O, no hidden clock or identity reads, no
//! internal state. The one external collaborator, the exercise catalog, is an
//! async boundary that fails soft to an empty list.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use hypertrophy_engine::intelligence::PeriodizationEngine;
//! use hypertrophy_engine::models::DataSnapshot;
//!
//! fn report(snapshot: &DataSnapshot) {
//!     let engine = PeriodizationEngine::new();
//!
//!     let insights = engine.program_insights(snapshot);
//!     println!(
//!         "readiness {} ({:?}), weekly target {} sets",
//!         insights.readiness_score, insights.readiness_label, insights.weekly_target_sets
//!     );
//!
//!     let preset = engine.smart_cycle_preset(snapshot);
//!     for suggestion in &preset.suggestions {
//!         println!("{}: {} ({:?})", suggestion.field, suggestion.suggestion, suggestion.confidence);
//!     }
//! }
//! ```

/// Common data models for programs, logs, check-ins, and setups
pub mod models;

/// Application constants and canonical domain tables
pub mod constants;

/// Engine and catalog configuration
pub mod config;

/// Readiness, volume, preset, and summary computation
pub mod intelligence;

/// Split templates, prescriptions, and atomic setup application
pub mod program;

/// External exercise-catalog boundary
pub mod catalog;

/// Injected identifier generation
pub mod ids;

/// Structured logging configuration
pub mod logging;
