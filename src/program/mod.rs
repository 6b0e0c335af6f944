// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Program Construction
//!
//! Turns an approved [`crate::models::ProgramSetupInput`] into the concrete
//! next-cycle entities: split-template day selection, round-robin exercise
//! placement, per-day set prescriptions, and even weekly set allocation.
//! [`builder::apply_program_setup`] bundles the whole replacement cycle into
//! one value so callers can commit it atomically.

pub mod builder;
pub mod split;

pub use builder::{
    apply_program_setup, build_prescriptions, build_training_days, evenly_allocate_sets, NextCycle,
};
pub use split::{split_templates, SplitTemplate};
