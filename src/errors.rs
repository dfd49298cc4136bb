//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		NumericError
/// Represents all possible numeric conversion and assignment errors.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum NumericError {
	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,

	/// The incoming value contains a character that is not a digit.
	#[error("Invalid digit: {0}")]
	InvalidDigit(char),

	/// The incoming value contains a digit that is out of range for the base.
	#[error("Invalid digit for base {1}: {0}")]
	InvalidRadix(char, u32),

	/// The incoming value is outside the representable range of the
	/// destination type. The offending value and the valid bounds are carried
	/// as decimal strings, as no single primitive type can span every domain
	/// from [`i128::MIN`] to [`u128::MAX`].
	#[error("Value {value} is out of range: must be >= {min} and <= {max}")]
	OutOfRange {
		/// The value that was rejected.
		value: String,

		/// The smallest value the destination type can represent.
		min:   String,

		/// The largest value the destination type can represent.
		max:   String,
	},

	/// The requested radix is not in the supported range of 2 to 36.
	#[error("Unsupported radix: {0} (must be 2-36)")]
	UnsupportedRadix(u32),

	/// The incoming value is negative, which is not allowed by the destination
	/// type.
	#[error("Value is negative")]
	ValueIsNegative,

	/// The incoming value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,

	/// The incoming byte slice is not the exact width of the destination type.
	#[error("Byte slice has wrong length: expected {expected}, got {actual}")]
	WrongByteLength {
		/// The number of bytes the destination type requires.
		expected: usize,

		/// The number of bytes actually provided.
		actual:   usize,
	},
}
