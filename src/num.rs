//! Fixed-width typed number type.

//	This lint check is unnecessary in this module because all indexing is
//	bounded by the BYTES constant, which is tied to the type's size, and the
//	type system ensures the arrays are always the correct length.
#![allow(
	clippy::indexing_slicing,
	reason = "We always know the size"
)]



//		Modules

#[cfg(test)]
#[path = "tests/num.rs"]
mod tests;



//		Packages

use crate::coerce::{Coerce, Coerced};
use crate::errors::NumericError;
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, self},
	marker::PhantomData,
	ops::Div,
	str::FromStr,
};
use generic_array::{ArrayLength, GenericArray};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use serde_json::Error as JsonError;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};
use typenum::{Quot, Unsigned, U8 as TnU8, U16 as TnU16, U32 as TnU32, U64 as TnU64, U128 as TnU128};



//		Type aliases

/// Helper type to calculate the number of storage bytes for a bit width.
pub type BytesForBits<BITS> = Quot<BITS, TnU8>;

/// Type alias for signed typed numbers, for convenience.
pub type SInt<BITS> = TypedNum<BITS, true>;

/// Type alias for unsigned typed numbers, for convenience.
pub type UInt<BITS> = TypedNum<BITS, false>;

/// An 8-bit two's-complement signed integer: `-128` to `127`.
pub type I8   = TypedNum<TnU8,   true>;

/// A 16-bit two's-complement signed integer: `-32,768` to `32,767`.
pub type I16  = TypedNum<TnU16,  true>;

/// A 32-bit two's-complement signed integer: `-2^31` to `2^31 - 1`.
pub type I32  = TypedNum<TnU32,  true>;

/// A 64-bit two's-complement signed integer: `-2^63` to `2^63 - 1`.
pub type I64  = TypedNum<TnU64,  true>;

/// A 128-bit two's-complement signed integer: `-2^127` to `2^127 - 1`.
pub type I128 = TypedNum<TnU128, true>;

/// An 8-bit unsigned integer: `0` to `255`.
pub type U8   = TypedNum<TnU8,   false>;

/// A 16-bit unsigned integer: `0` to `65,535`.
pub type U16  = TypedNum<TnU16,  false>;

/// A 32-bit unsigned integer: `0` to `2^32 - 1`.
pub type U32  = TypedNum<TnU32,  false>;

/// A 64-bit unsigned integer: `0` to `2^64 - 1`.
pub type U64  = TypedNum<TnU64,  false>;

/// A 128-bit unsigned integer: `0` to `2^128 - 1`.
pub type U128 = TypedNum<TnU128, false>;



//		Structs

//		TypedNum
/// A fixed-width integer value.
///
/// This type holds one value constrained to a declared bit width and
/// signedness, and offers an explicit choice of assignment discipline:
/// [`set()`](TypedNum::set()) fails with a range error on overflow, while
/// [`wrapping_set()`](TypedNum::wrapping_set()) always succeeds by discarding
/// overflow bits (modular arithmetic). It also provides bit-level utilities
/// over the declared width: population counts, leading/trailing scans,
/// rotation, and reversal.
///
/// # Type parameters
///
/// * `BITS`   - The number of bits used to represent the value, as a
///              [`typenum`] type. The supported widths are 8, 16, 32, 64, and
///              128; the [`I8`]–[`I128`] and [`U8`]–[`U128`] aliases cover
///              them all.
/// * `SIGNED` - Whether the value is signed (`true`) or unsigned (`false`).
///
/// # Assignment
///
/// All assignment input funnels through the [`Coerce`] boundary, so anything
/// numeric-like is accepted: primitive integers, floats (truncated toward
/// zero), strings, and other typed numbers. Non-numeric input coerces to
/// zero rather than erroring. The checked path then rejects values outside
/// `[MIN, MAX]`; the wrapping path masks the two's-complement bit pattern to
/// the low `BITS` bits.
///
/// # Conversion
///
/// [`TryFrom`] is implemented for all primitive integer types in both
/// directions. As every such conversion is potentially lossy for at least
/// one width, there are no [`From`] implementations.
///
/// # Internal representation
///
/// The value is stored as exactly `BITS / 8` bytes in little-endian order,
/// matching the most common CPU architectures and Rust's own representation
/// of primitive integers. A signed value is stored as its two's-complement
/// bit pattern; reads reinterpret the pattern under the declared signedness.
///
/// # Thread safety
///
/// Values are plain [`Copy`] data with no interior mutability. Mutation
/// requires `&mut self`, so concurrent access to a single value is governed
/// entirely by Rust's usual borrowing rules; no internal locking exists or
/// is needed.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct TypedNum<BITS, const SIGNED: bool>(GenericArray<u8, BytesForBits<BITS>>)
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
;

//󰭅		TypedNum
impl<BITS, const SIGNED: bool> TypedNum<BITS, SIGNED>
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		Public constants
	/// Number of bits used for storage.
	pub const BITS:  u32 = BITS::U32;

	/// Number of bytes used for storage.
	pub const BYTES: u32 = BytesForBits::<BITS>::U32;

	//		Private constants
	/// Mask for the valid bits of the value, e.g. `0xFF` for 8 bits.
	const MASK: u128 = if BITS::U32 == 128 {
		u128::MAX
	} else {
		(1_u128 << BITS::U32) - 1
	};

	/// The bit pattern of the sign bit at the declared width.
	const SIGN_BIT: u128 = 1_u128 << (BITS::U32 - 1);

	//		Constructors

	//		new
	/// Creates a new [`TypedNum`] via the checked assignment path.
	///
	/// The input is coerced (non-numeric input becomes zero) and then
	/// range-checked against the declared domain: construction fails rather
	/// than silently clamping or wrapping an out-of-range initial value.
	///
	/// # Parameters
	///
	/// * `value` - The initial value. The zero-initialised form is available
	///             via [`Default`].
	///
	/// # Errors
	///
	/// Returns [`NumericError::OutOfRange`], carrying the offending value and
	/// the valid bounds, if the coerced value does not fit the declared width
	/// and signedness.
	pub fn new(value: impl Coerce) -> Result<Self, NumericError> {
		let mut result = Self::default();
		result.set(value)?;
		Ok(result)
	}

	//		wrapping_new
	/// Creates a new [`TypedNum`] via the wrapping assignment path.
	///
	/// This is the functional constructor form: the input's two's-complement
	/// bit pattern is truncated to the low `BITS` bits, so any numeric input
	/// maps onto the declared domain. It never fails.
	///
	/// ```
	/// use typed_numbers::{I8, U8};
	///
	/// assert_eq!(U8::wrapping_new(256).as_u128(),  0);
	/// assert_eq!(U8::wrapping_new(-1).as_u128(), 255);
	/// assert_eq!(I8::wrapping_new(128).as_i128(), -128);
	/// ```
	///
	/// # Parameters
	///
	/// * `value` - The value to truncate into the declared domain.
	#[must_use]
	pub fn wrapping_new(value: impl Coerce) -> Self {
		let mut result = Self::default();
		result.wrapping_set(value);
		result
	}

	//		Public methods

	//		as_i128
	/// The current value under the declared signedness.
	///
	/// For signed widths the stored two's-complement pattern is
	/// sign-extended. For [`U128`], values above [`i128::MAX`] wrap; use
	/// [`as_u128()`](TypedNum::as_u128()) for the full unsigned range.
	#[expect(clippy::cast_possible_wrap, reason = "Reinterpreting the bit pattern is intended")]
	#[must_use]
	pub fn as_i128(&self) -> i128 {
		let pattern = self.as_u128();
		if SIGNED && pattern & Self::SIGN_BIT != 0 {
			(pattern | !Self::MASK) as i128
		} else {
			pattern as i128
		}
	}

	//		as_slice
	/// Represents the internal value as a slice of little-endian bytes.
	///
	/// The length is always equal to [`Self::BYTES`].
	#[must_use]
	pub const fn as_slice(&self) -> &[u8] {
		self.0.as_slice()
	}

	//		as_u128
	/// The current value as its raw `BITS`-wide bit pattern, zero-extended.
	///
	/// A signed value's two's-complement bits are reinterpreted as unsigned;
	/// this is the form all the bit utilities operate on.
	#[must_use]
	pub fn as_u128(&self) -> u128 {
		let mut pattern = 0_u128;
		for (i, &byte) in self.0.iter().enumerate() {
			pattern |= u128::from(byte) << (i * 8);
		}
		pattern
	}

	//		count_ones
	/// Counts the ones in the binary representation of the value.
	#[must_use]
	pub fn count_ones(&self) -> u32 {
		self.as_u128().count_ones()
	}

	//		count_zeros
	/// Counts the zeroes in the binary representation of the value.
	///
	/// All `BITS` positions are counted, so the result plus
	/// [`count_ones()`](TypedNum::count_ones()) is always [`Self::BITS`].
	#[must_use]
	pub fn count_zeros(&self) -> u32 {
		Self::BITS - self.count_ones()
	}

	//		from_be_bytes
	/// Creates a [`TypedNum`] from a big-endian byte slice.
	///
	/// As this type uses little-endian storage internally, this reverses the
	/// bytes. Every byte pattern of the correct length is a valid value.
	///
	/// # Parameters
	///
	/// * `bytes` - The big-endian bytes to create the [`TypedNum`] from.
	///
	/// # Errors
	///
	/// Returns an error if the slice is not exactly [`Self::BYTES`] long.
	pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, NumericError> {
		if bytes.len() != Self::BYTES as usize {
			return Err(NumericError::WrongByteLength {
				expected: Self::BYTES as usize,
				actual:   bytes.len(),
			});
		}

		let mut value = GenericArray::<u8, BytesForBits<BITS>>::default();
		for (i, byte) in value.iter_mut().enumerate() {
			*byte = bytes[Self::BYTES as usize - 1 - i];
		}

		Ok(Self(value))
	}

	//		from_json
	/// Deserialises a JSON value into this typed number.
	///
	/// # Parameters
	///
	/// * `json` - The JSON string to deserialise.
	///
	/// # Errors
	///
	/// If the JSON is invalid, or the number inside it does not fit the
	/// declared domain, an error will be returned.
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}

	//		from_le_bytes
	/// Creates a [`TypedNum`] from a little-endian byte slice.
	///
	/// This matches the internal storage, so the bytes are used directly.
	/// Every byte pattern of the correct length is a valid value.
	///
	/// # Parameters
	///
	/// * `bytes` - The little-endian bytes to create the [`TypedNum`] from.
	///
	/// # Errors
	///
	/// Returns an error if the slice is not exactly [`Self::BYTES`] long.
	pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, NumericError> {
		if bytes.len() != Self::BYTES as usize {
			return Err(NumericError::WrongByteLength {
				expected: Self::BYTES as usize,
				actual:   bytes.len(),
			});
		}

		let mut value = GenericArray::<u8, BytesForBits<BITS>>::default();
		value.copy_from_slice(bytes);

		Ok(Self(value))
	}

	//		is_negative
	/// Determines if the value is negative.
	///
	/// Always `false` for unsigned widths.
	#[must_use]
	pub fn is_negative(&self) -> bool {
		SIGNED && self.as_u128() & Self::SIGN_BIT != 0
	}

	//		is_zero
	/// Determines if the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.0.iter().all(|&b| b == 0)
	}

	//		leading_ones
	/// Counts the leading ones in the binary representation of the value.
	///
	/// The scan starts at the most-significant bit of the declared width and
	/// stops at the first zero bit. An all-ones value returns [`Self::BITS`].
	#[must_use]
	pub fn leading_ones(&self) -> u32 {
		(self.as_u128() << (128 - Self::BITS)).leading_ones()
	}

	//		leading_zeros
	/// Counts the leading zeroes in the binary representation of the value.
	///
	/// The scan starts at the most-significant bit of the declared width and
	/// stops at the first one bit. An all-zero value returns [`Self::BITS`].
	#[must_use]
	pub fn leading_zeros(&self) -> u32 {
		(self.as_u128() << (128 - Self::BITS)).leading_zeros().min(Self::BITS)
	}

	//		max_value
	/// The largest value representable at the declared width and signedness.
	///
	/// Ideally this would be a constant, but that's not possible just yet
	/// until Rust stabilises const generic expressions.
	#[must_use]
	pub fn max_value() -> Self {
		if SIGNED {
			Self::from_pattern(Self::MASK >> 1)
		} else {
			Self::from_pattern(Self::MASK)
		}
	}

	//		min_value
	/// The smallest value representable at the declared width and signedness.
	///
	/// Ideally this would be a constant, but that's not possible just yet
	/// until Rust stabilises const generic expressions.
	#[must_use]
	pub fn min_value() -> Self {
		if SIGNED {
			Self::from_pattern(Self::SIGN_BIT)
		} else {
			Self::default()
		}
	}

	//		parse
	/// Parses a string into a [`TypedNum`].
	///
	/// This is a convenience method wrapping the [`FromStr`] implementation.
	///
	/// # Parameters
	///
	/// * `s` - The string to parse.
	///
	/// # Errors
	///
	/// If the number is invalid or out of range, an error will be returned.
	pub fn parse(s: &str) -> Result<Self, NumericError> {
		s.parse()
	}

	//		reverse_bits
	/// Reverses the order of bits in the value.
	///
	/// The bit at position `i` moves to position `BITS - 1 - i`: the
	/// least-significant bit becomes the most-significant bit and vice versa.
	/// Returns a new value; the receiver is not mutated.
	#[must_use]
	pub fn reverse_bits(&self) -> Self {
		Self::from_pattern(self.as_u128().reverse_bits() >> (128 - Self::BITS))
	}

	//		rotate_left
	/// Rotates the bits of the value to the left.
	///
	/// The `n` most-significant bits are wrapped around to the
	/// least-significant positions. The amount is normalised modulo
	/// [`Self::BITS`], so it may exceed the width. Returns a new value; the
	/// receiver is not mutated.
	///
	/// Please note this isn't the same operation as the `<<` shift operator!
	///
	/// # Parameters
	///
	/// * `n` - The number of bit positions to rotate by.
	#[must_use]
	pub fn rotate_left(&self, n: u32) -> Self {
		let shift = n % Self::BITS;
		if shift == 0 {
			return *self;
		}

		let pattern = self.as_u128();
		Self::from_pattern((pattern << shift) | (pattern >> (Self::BITS - shift)))
	}

	//		rotate_right
	/// Rotates the bits of the value to the right.
	///
	/// The `n` least-significant bits are wrapped around to the
	/// most-significant positions. The amount is normalised modulo
	/// [`Self::BITS`], so it may exceed the width. Returns a new value; the
	/// receiver is not mutated.
	///
	/// Please note this isn't the same operation as the `>>` shift operator!
	///
	/// # Parameters
	///
	/// * `n` - The number of bit positions to rotate by.
	#[must_use]
	pub fn rotate_right(&self, n: u32) -> Self {
		let shift = n % Self::BITS;
		if shift == 0 {
			return *self;
		}

		let pattern = self.as_u128();
		Self::from_pattern((pattern >> shift) | (pattern << (Self::BITS - shift)))
	}

	//		set
	/// Sets the value, failing on overflow.
	///
	/// The input is coerced (non-numeric input becomes zero, fractional input
	/// is truncated toward zero) and then range-checked: if the result lies
	/// outside `[MIN, MAX]` for the declared width and signedness, the value
	/// is left unchanged and an error is returned. In-range values are stored
	/// verbatim.
	///
	/// # Parameters
	///
	/// * `value` - The new value.
	///
	/// # Errors
	///
	/// Returns [`NumericError::OutOfRange`], carrying the offending value and
	/// the valid bounds, if the coerced value does not fit.
	pub fn set(&mut self, value: impl Coerce) -> Result<(), NumericError> {
		let coerced = value.coerce();

		if !Self::in_range(coerced) {
			return Err(NumericError::OutOfRange {
				value: coerced.to_string(),
				min:   Self::min_value().to_string(),
				max:   Self::max_value().to_string(),
			});
		}

		*self = Self::from_pattern(coerced.to_bits());
		Ok(())
	}

	//		to_be_bytes
	/// The value as big-endian bytes.
	#[must_use]
	pub fn to_be_bytes(&self) -> Vec<u8> {
		let mut bytes = self.0.to_vec();
		bytes.reverse();
		bytes
	}

	//		to_json
	/// Serialises this typed number to a JSON value.
	///
	/// # Errors
	///
	/// If the value cannot be serialised, an error will be returned.
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}

	//		to_le_bytes
	/// The value as little-endian bytes.
	#[must_use]
	pub fn to_le_bytes(&self) -> Vec<u8> {
		self.0.to_vec()
	}

	//		to_radix
	/// Formats the value as a string in the given radix.
	///
	/// Digits above 9 are lowercase letters, and negative signed values get a
	/// `-` prefix followed by the magnitude, matching standard integer
	/// formatting. Radix 10 is also available via [`Display`].
	///
	/// # Parameters
	///
	/// * `radix` - The base to format in, from 2 to 36.
	///
	/// # Errors
	///
	/// Returns [`NumericError::UnsupportedRadix`] if the radix is outside the
	/// supported range.
	pub fn to_radix(&self, radix: u32) -> Result<String, NumericError> {
		if !(2..=36).contains(&radix) {
			return Err(NumericError::UnsupportedRadix(radix));
		}

		let (negative, mut magnitude) = if self.is_negative() {
			(true,  self.as_i128().unsigned_abs())
		} else {
			(false, self.as_u128())
		};

		if magnitude == 0 {
			return Ok("0".to_owned());
		}

		//	Extract digits least-significant first
		let mut digits = Vec::new();
		while magnitude != 0 {
			#[expect(clippy::cast_possible_truncation, reason = "Remainder is always below the radix")]
			let digit = (magnitude % u128::from(radix)) as u32;
			digits.push(match char::from_digit(digit, radix) {
				Some(c) => c,
				None    => return Err(NumericError::UnsupportedRadix(radix)),
			});
			magnitude /= u128::from(radix);
		}

		let mut result = String::with_capacity(digits.len() + usize::from(negative));
		if negative {
			result.push('-');
		}
		result.extend(digits.iter().rev());
		Ok(result)
	}

	//		trailing_ones
	/// Counts the trailing ones in the binary representation of the value.
	///
	/// The scan starts at the least-significant bit and stops at the first
	/// zero bit. An all-ones value returns [`Self::BITS`].
	#[must_use]
	pub fn trailing_ones(&self) -> u32 {
		self.as_u128().trailing_ones()
	}

	//		trailing_zeros
	/// Counts the trailing zeroes in the binary representation of the value.
	///
	/// The scan starts at the least-significant bit and stops at the first
	/// one bit. An all-zero value returns [`Self::BITS`].
	#[must_use]
	pub fn trailing_zeros(&self) -> u32 {
		self.as_u128().trailing_zeros().min(Self::BITS)
	}

	//		wrapping_set
	/// Sets the value, wrapping around the boundary of the type on overflow.
	///
	/// The input is coerced the same way as for [`set()`](TypedNum::set()),
	/// and its two's-complement bit pattern is masked to the low `BITS` bits
	/// before being stored. This never fails.
	///
	/// # Parameters
	///
	/// * `value` - The new value.
	pub fn wrapping_set(&mut self, value: impl Coerce) {
		*self = Self::from_pattern(value.coerce().to_bits());
	}

	//		zero
	/// The value of `0` as a [`TypedNum`].
	///
	/// Ideally this would be a constant, but that's not possible just yet
	/// until Rust stabilises const generic expressions.
	#[must_use]
	pub fn zero() -> Self {
		Self::default()
	}

	//		Private methods

	//		from_pattern
	/// Creates a [`TypedNum`] from a bit pattern, masked to the low `BITS`
	/// bits and stored in little-endian order.
	#[expect(clippy::cast_possible_truncation, reason = "Each byte takes only its own 8 bits of the pattern")]
	fn from_pattern(pattern: u128) -> Self {
		let masked    = pattern & Self::MASK;
		let mut bytes = GenericArray::<u8, BytesForBits<BITS>>::default();

		for (i, byte) in bytes.iter_mut().enumerate() {
			*byte = (masked >> (i * 8)) as u8;
		}

		Self(bytes)
	}

	//		in_range
	/// Determines whether a coerced input fits the declared domain.
	fn in_range(coerced: Coerced) -> bool {
		if coerced.is_negative() {
			SIGNED && coerced.magnitude() <= Self::SIGN_BIT
		} else if SIGNED {
			coerced.magnitude() <= Self::MASK >> 1
		} else {
			coerced.magnitude() <= Self::MASK
		}
	}
}

//󰭅		Binary
impl<BITS, const SIGNED: bool> Binary for TypedNum<BITS, SIGNED>
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	The raw bit pattern, so a negative value shows its two's complement
		Binary::fmt(&self.as_u128(), f)
	}
}

//󰭅		Coerce
impl<BITS, const SIGNED: bool> Coerce for TypedNum<BITS, SIGNED>
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		coerce
	fn coerce(self) -> Coerced {
		if SIGNED {
			self.as_i128().coerce()
		} else {
			self.as_u128().coerce()
		}
	}
}

//󰭅		Debug
impl<BITS, const SIGNED: bool> Debug for TypedNum<BITS, SIGNED>
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Standard format - TypedNum<bits, signed>(value)
		write!(f, "TypedNum::<{}, {}>({})", Self::BITS, SIGNED, self)?;

		//	For alternate formatting (#), show the byte array as well
		if f.alternate() {
			write!(f, " [")?;
			for (i, byte) in self.0.iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "0x{byte:02x}")?;
			}
			write!(f, "]")?;
		}

		Ok(())
	}
}

//󰭅		Deserialize
impl<'de, BITS, const SIGNED: bool> Deserialize<'de> for TypedNum<BITS, SIGNED>
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		deserialize
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(NumVisitor::<BITS, SIGNED>(PhantomData))
		} else {
			//	For binary formats, expect raw bytes
			deserializer.deserialize_bytes(BytesVisitor::<BITS, SIGNED>(PhantomData))
		}
	}
}

//󰭅		Display
impl<BITS, const SIGNED: bool> Display for TypedNum<BITS, SIGNED>
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if SIGNED {
			write!(f, "{}", self.as_i128())
		} else {
			write!(f, "{}", self.as_u128())
		}
	}
}

//󰭅		FromSql
impl<'a, BITS, const SIGNED: bool> FromSql<'a> for TypedNum<BITS, SIGNED>
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		from_sql
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => Ok(Self::new(i16::from_sql(ty, raw)?).map_err(Box::new)?),
			&Type::INT4 => Ok(Self::new(i32::from_sql(ty, raw)?).map_err(Box::new)?),
			&Type::INT8 => Ok(Self::new(i64::from_sql(ty, raw)?).map_err(Box::new)?),
			&Type::TEXT => Ok(
				String::from_utf8(raw.to_vec()).map_err(Box::new)?.parse::<Self>().map_err(Box::new)?
			),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for TypedNum<{}, {}>: {unknown}", Self::BITS, SIGNED),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}
}

//󰭅		FromStr
impl<BITS, const SIGNED: bool> FromStr for TypedNum<BITS, SIGNED>
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Err = NumericError;

	//		from_str
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();

		if trimmed.is_empty() {
			return Err(NumericError::EmptyValue);
		}

		//	A single optional sign
		let (negative, unsigned) = match trimmed.strip_prefix('-') {
			Some(rest) => (true,  rest),
			None       => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
		};

		if negative && !SIGNED {
			return Err(NumericError::ValueIsNegative);
		}

		//	Handle different bases
		#[expect(clippy::option_if_let_else, reason = "Clearer to read as if-let-else")]
		let (digits, radix) =
			if        let Some(rest) = unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
				(rest, 16)
			} else if let Some(rest) = unsigned.strip_prefix("0b").or_else(|| unsigned.strip_prefix("0B")) {
				(rest,  2)
			} else if let Some(rest) = unsigned.strip_prefix("0o").or_else(|| unsigned.strip_prefix("0O")) {
				(rest,  8)
			} else {
				(unsigned, 10)
			}
		;

		if digits.is_empty() {
			return Err(NumericError::EmptyValue);
		}

		//	Parse the absolute value
		let mut value = 0_u128;

		for c in digits.chars() {
			let digit = match c {
				'0'..='9' => u32::from(c as u8 - b'0'),
				'a'..='z' => u32::from(c as u8 - b'a' + 10),
				'A'..='Z' => u32::from(c as u8 - b'A' + 10),
				'_'       => continue,  //	Allow underscores between digits
				_         => return Err(NumericError::InvalidDigit(c)),
			};

			if digit >= radix {
				return Err(NumericError::InvalidRadix(c, radix));
			}

			value = value
				.checked_mul(u128::from(radix))
				.and_then(|v| v.checked_add(u128::from(digit)))
				.ok_or(NumericError::ValueTooLarge)?;
		}

		//	Range-check the magnitude against the declared domain
		let coerced = Coerced::new(negative, value);
		if !Self::in_range(coerced) {
			return Err(NumericError::ValueTooLarge);
		}

		Ok(Self::from_pattern(coerced.to_bits()))
	}
}

//󰭅		LowerHex
impl<BITS, const SIGNED: bool> LowerHex for TypedNum<BITS, SIGNED>
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		LowerHex::fmt(&self.as_u128(), f)
	}
}

//󰭅		Octal
impl<BITS, const SIGNED: bool> Octal for TypedNum<BITS, SIGNED>
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Octal::fmt(&self.as_u128(), f)
	}
}

//󰭅		Ord
impl<BITS, const SIGNED: bool> Ord for TypedNum<BITS, SIGNED>
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		cmp
	fn cmp(&self, other: &Self) -> Ordering {
		//	Compare by numeric value, not by byte order
		if SIGNED {
			self.as_i128().cmp(&other.as_i128())
		} else {
			self.as_u128().cmp(&other.as_u128())
		}
	}
}

//󰭅		PartialOrd
impl<BITS, const SIGNED: bool> PartialOrd for TypedNum<BITS, SIGNED>
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		partial_cmp
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Serialize
impl<BITS, const SIGNED: bool> Serialize for TypedNum<BITS, SIGNED>
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		serialize
	#[expect(clippy::cast_possible_truncation, reason = "Value fits in 64 bits by the width check")]
	#[expect(clippy::cast_sign_loss,           reason = "Unsigned branch holds a non-negative value")]
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	For JSON and similar formats, serialise as a number if it fits
			if Self::BITS <= 64 {
				if SIGNED {
					serializer.serialize_i64(self.as_i128() as i64)
				} else {
					serializer.serialize_u64(self.as_u128() as u64)
				}
			} else {
				//	Fall back to a string for the 128-bit widths
				serializer.serialize_str(&self.to_string())
			}
		} else {
			//	For binary formats, serialise the raw little-endian bytes
			serializer.serialize_bytes(self.as_slice())
		}
	}
}

//󰭅		ToSql
impl<BITS, const SIGNED: bool> ToSql for TypedNum<BITS, SIGNED>
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		to_sql
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		i64::try_from(*self).map_err(Box::new)?.to_sql(ty, out)
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8)
	}

	to_sql_checked!();
}

//󰭅		TryFrom: primitive integers -> TypedNum
macro_rules! impl_try_from_primitive {
	($($t:ty),*) => {
		$(
			impl<BITS, const SIGNED: bool> TryFrom<$t> for TypedNum<BITS, SIGNED>
			where
				BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
				BytesForBits<BITS>: ArrayLength,
				GenericArray<u8, BytesForBits<BITS>>: Copy,
			{
				type Error = NumericError;

				//		try_from
				fn try_from(v: $t) -> Result<Self, Self::Error> {
					Self::new(v)
				}
			}
		)*
	};
}

impl_try_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

//󰭅		TryFrom: TypedNum -> signed primitives
macro_rules! impl_try_into_signed {
	($($t:ty),*) => {
		$(
			impl<BITS, const SIGNED: bool> TryFrom<TypedNum<BITS, SIGNED>> for $t
			where
				BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
				BytesForBits<BITS>: ArrayLength,
				GenericArray<u8, BytesForBits<BITS>>: Copy,
			{
				type Error = NumericError;

				//		try_from
				fn try_from(v: TypedNum<BITS, SIGNED>) -> Result<Self, Self::Error> {
					if SIGNED {
						Self::try_from(v.as_i128()).map_err(|_err| NumericError::ValueTooLarge)
					} else {
						Self::try_from(v.as_u128()).map_err(|_err| NumericError::ValueTooLarge)
					}
				}
			}
		)*
	};
}

impl_try_into_signed!(i8, i16, i32, i64, isize);

//󰭅		TryFrom: TypedNum -> i128
impl<BITS, const SIGNED: bool> TryFrom<TypedNum<BITS, SIGNED>> for i128
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Error = NumericError;

	//		try_from
	fn try_from(v: TypedNum<BITS, SIGNED>) -> Result<Self, Self::Error> {
		if SIGNED {
			Ok(v.as_i128())
		} else {
			Self::try_from(v.as_u128()).map_err(|_err| NumericError::ValueTooLarge)
		}
	}
}

//󰭅		TryFrom: TypedNum -> unsigned primitives
macro_rules! impl_try_into_unsigned {
	($($t:ty),*) => {
		$(
			impl<BITS, const SIGNED: bool> TryFrom<TypedNum<BITS, SIGNED>> for $t
			where
				BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
				BytesForBits<BITS>: ArrayLength,
				GenericArray<u8, BytesForBits<BITS>>: Copy,
			{
				type Error = NumericError;

				//		try_from
				fn try_from(v: TypedNum<BITS, SIGNED>) -> Result<Self, Self::Error> {
					if v.is_negative() {
						return Err(NumericError::ValueIsNegative);
					}
					Self::try_from(v.as_u128()).map_err(|_err| NumericError::ValueTooLarge)
				}
			}
		)*
	};
}

impl_try_into_unsigned!(u8, u16, u32, u64, usize);

//󰭅		TryFrom: TypedNum -> u128
impl<BITS, const SIGNED: bool> TryFrom<TypedNum<BITS, SIGNED>> for u128
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Error = NumericError;

	//		try_from
	fn try_from(v: TypedNum<BITS, SIGNED>) -> Result<Self, Self::Error> {
		if v.is_negative() {
			return Err(NumericError::ValueIsNegative);
		}
		Ok(v.as_u128())
	}
}

//󰭅		UpperHex
impl<BITS, const SIGNED: bool> UpperHex for TypedNum<BITS, SIGNED>
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		UpperHex::fmt(&self.as_u128(), f)
	}
}



//		Private structs

//		BytesVisitor
/// Visitor for deserialising a typed number from raw bytes.
struct BytesVisitor<BITS, const SIGNED: bool>(PhantomData<BITS>);

//󰭅		Visitor
impl<BITS, const SIGNED: bool> Visitor<'_> for BytesVisitor<BITS, SIGNED>
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Value = TypedNum<BITS, SIGNED>;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "{} bytes in little-endian order", TypedNum::<BITS, SIGNED>::BYTES)
	}

	//		visit_bytes
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		TypedNum::from_le_bytes(v).map_err(E::custom)
	}
}

//		NumVisitor
/// Visitor for deserialising a typed number from human-readable formats.
struct NumVisitor<BITS, const SIGNED: bool>(PhantomData<BITS>);

//󰭅		Visitor
impl<BITS, const SIGNED: bool> Visitor<'_> for NumVisitor<BITS, SIGNED>
where
	BITS: Unsigned + Div<TnU8> + Eq + PartialOrd,
	BytesForBits<BITS>: ArrayLength,
	GenericArray<u8, BytesForBits<BITS>>: Copy,
{
	type Value = TypedNum<BITS, SIGNED>;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an integer or a numeric string")
	}

	//		visit_i64
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		TypedNum::new(v).map_err(E::custom)
	}

	//		visit_u64
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		TypedNum::new(v).map_err(E::custom)
	}

	//		visit_i128
	fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		TypedNum::new(v).map_err(E::custom)
	}

	//		visit_u128
	fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		TypedNum::new(v).map_err(E::custom)
	}

	//		visit_str
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
}
