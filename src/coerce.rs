//! Input coercion for typed number assignment.
//!
//! Every setter and constructor in this crate funnels its input through the
//! [`Coerce`] trait, which is the single coercion boundary: any numeric-like
//! input is reduced to a [`Coerced`] sign-magnitude value, and anything that
//! cannot be interpreted as a number becomes zero. Coercion itself never
//! fails — range checking happens later, in the checked assignment path.



//		Modules

#[cfg(test)]
#[path = "tests/coerce.rs"]
mod tests;



//		Packages

use core::fmt::{Display, Formatter, self};



//		Structs

//		Coerced
/// A coerced numeric input, held as sign and magnitude.
///
/// The magnitude is a [`u128`], which together with the sign flag is wide
/// enough to represent every value of every supported domain exactly — from
/// [`i128::MIN`] to [`u128::MAX`] — so range checks against any 128-bit-or-
/// narrower type are precise.
///
/// A zero magnitude is always stored as non-negative, so equality behaves as
/// expected for inputs such as `-0.0`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Coerced {
	/// Whether the value is below zero.
	negative:  bool,

	/// The absolute value.
	magnitude: u128,
}

//󰭅		Coerced
impl Coerced {
	//		new
	/// Creates a new [`Coerced`] value from a sign and a magnitude.
	#[must_use]
	pub const fn new(negative: bool, magnitude: u128) -> Self {
		Self {
			negative: negative && magnitude != 0,
			magnitude,
		}
	}

	//		zero
	/// The zero value, which is also the fallback for non-numeric input.
	#[must_use]
	pub const fn zero() -> Self {
		Self { negative: false, magnitude: 0 }
	}

	//		is_negative
	/// Determines if the value is negative.
	#[must_use]
	pub const fn is_negative(self) -> bool {
		self.negative
	}

	//		is_zero
	/// Determines if the value is zero.
	#[must_use]
	pub const fn is_zero(self) -> bool {
		self.magnitude == 0
	}

	//		magnitude
	/// The absolute value.
	#[must_use]
	pub const fn magnitude(self) -> u128 {
		self.magnitude
	}

	//		to_bits
	/// The 128-bit two's-complement bit pattern of the value.
	///
	/// Negative values wrap modulo 2^128, so the result holds the same low
	/// bits that an arbitrary-precision two's-complement encoding would.
	#[must_use]
	pub const fn to_bits(self) -> u128 {
		if self.negative {
			self.magnitude.wrapping_neg()
		} else {
			self.magnitude
		}
	}
}

//󰭅		Display
impl Display for Coerced {
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.negative {
			write!(f, "-")?;
		}
		write!(f, "{}", self.magnitude)
	}
}



//		Traits

//§		Coerce
/// Conversion of arbitrary numeric-like input into a [`Coerced`] value.
///
/// This is infallible by contract: implementations must substitute
/// [`Coerced::zero()`] for any input that cannot be interpreted as a number,
/// rather than erroring. Fractional values are truncated toward zero.
pub trait Coerce {
	//		coerce
	/// Reduces the input to a sign-magnitude numeric value.
	fn coerce(self) -> Coerced;
}

//󰭅		Coerce: bool
impl Coerce for bool {
	//		coerce
	fn coerce(self) -> Coerced {
		Coerced::new(false, u128::from(self))
	}
}

//󰭅		Coerce: Coerced
impl Coerce for Coerced {
	//		coerce
	fn coerce(self) -> Coerced {
		self
	}
}

//󰭅		Coerce: f32
impl Coerce for f32 {
	//		coerce
	fn coerce(self) -> Coerced {
		f64::from(self).coerce()
	}
}

//󰭅		Coerce: f64
impl Coerce for f64 {
	//		coerce
	#[expect(clippy::cast_possible_truncation, reason = "Saturating behaviour of the cast is intended")]
	#[expect(clippy::cast_sign_loss,           reason = "Cast operates on the absolute value")]
	fn coerce(self) -> Coerced {
		//	NaN and infinities are non-numeric as far as assignment is concerned
		if !self.is_finite() {
			return Coerced::zero();
		}

		//	Truncate toward zero before any masking or range checking. The cast
		//	saturates at the u128 boundaries for enormous magnitudes.
		let truncated = self.trunc();
		Coerced::new(truncated < 0.0_f64, truncated.abs() as u128)
	}
}

//󰭅		Coerce: &str
impl Coerce for &str {
	//		coerce
	fn coerce(self) -> Coerced {
		let trimmed = self.trim();
		if trimmed.is_empty() {
			return Coerced::zero();
		}

		//	A single optional sign, then an optional base prefix
		let (negative, unsigned) = match trimmed.strip_prefix('-') {
			Some(rest) => (true,  rest),
			None       => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
		};

		let magnitude =
			if        let Some(rest) = unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
				u128::from_str_radix(rest, 16).ok()
			} else if let Some(rest) = unsigned.strip_prefix("0b").or_else(|| unsigned.strip_prefix("0B")) {
				u128::from_str_radix(rest,  2).ok()
			} else if let Some(rest) = unsigned.strip_prefix("0o").or_else(|| unsigned.strip_prefix("0O")) {
				u128::from_str_radix(rest,  8).ok()
			} else {
				unsigned.parse::<u128>().ok()
			}
		;

		//	Fall back to float syntax, and failing that, to zero
		magnitude.map_or_else(
			|| trimmed.parse::<f64>().map_or_else(|_| Coerced::zero(), Coerce::coerce),
			|magnitude| Coerced::new(negative, magnitude),
		)
	}
}

//󰭅		Coerce: String
impl Coerce for String {
	//		coerce
	fn coerce(self) -> Coerced {
		self.as_str().coerce()
	}
}

//󰭅		Coerce: signed integers
macro_rules! impl_coerce_signed {
	($($t:ty),*) => {
		$(
			impl Coerce for $t {
				//		coerce
				fn coerce(self) -> Coerced {
					Coerced::new(self < 0, u128::from(self.unsigned_abs()))
				}
			}
		)*
	};
}

impl_coerce_signed!(i8, i16, i32, i64, i128);

//󰭅		Coerce: isize
impl Coerce for isize {
	//		coerce
	#[expect(clippy::cast_lossless, reason = "No From impl exists for platform-sized integers")]
	fn coerce(self) -> Coerced {
		Coerced::new(self < 0, self.unsigned_abs() as u128)
	}
}

//󰭅		Coerce: unsigned integers
macro_rules! impl_coerce_unsigned {
	($($t:ty),*) => {
		$(
			impl Coerce for $t {
				//		coerce
				fn coerce(self) -> Coerced {
					Coerced::new(false, u128::from(self))
				}
			}
		)*
	};
}

impl_coerce_unsigned!(u8, u16, u32, u64, u128);

//󰭅		Coerce: usize
impl Coerce for usize {
	//		coerce
	#[expect(clippy::cast_lossless, reason = "No From impl exists for platform-sized integers")]
	fn coerce(self) -> Coerced {
		Coerced::new(false, self as u128)
	}
}
