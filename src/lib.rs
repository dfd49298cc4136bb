//! The Typed Numbers crate is a library of fixed-width integer value types
//! with an explicit choice between checked (error-on-overflow) and wrapping
//! (modular) assignment, plus bit-level inspection and manipulation
//! utilities.
//!
//! It is intended for code that has to interoperate with binary formats,
//! network protocols, or foreign numeric ABIs, where the exact bit width and
//! the overflow behaviour of every value matter.



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_sign_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod coerce;
mod errors;
mod num;



//		Packages

pub use coerce::{Coerce, Coerced};
pub use errors::NumericError;
pub use num::{BytesForBits, I8, I16, I32, I64, I128, SInt, TypedNum, U8, U16, U32, U64, U128, UInt};
