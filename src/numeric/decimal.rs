// ============================================================================
// Decimal Normalizer
// Round-half-up normalization to an explicit number of fractional digits
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits used when no precision is requested.
pub const DEFAULT_PLACES: i32 = 3;

/// Largest scale a `Decimal` can carry.
pub const MAX_PLACES: i32 = 28;

/// Conversion of a numeric input into an exact `Decimal`.
///
/// Integers convert exactly. Floats keep their binary value, so `0.1_f64`
/// becomes `0.1000000000000000055511151231` and `2.675_f64` sits just below
/// the tie at `2.67499999999999982236431606`.
///
/// # Errors
/// - `InvalidArgument` for NaN and infinities
/// - `Overflow` when the magnitude exceeds what a `Decimal` can hold
pub trait ToDecimal {
    fn to_decimal(&self) -> NumericResult<Decimal>;
}

impl ToDecimal for Decimal {
    #[inline]
    fn to_decimal(&self) -> NumericResult<Decimal> {
        Ok(*self)
    }
}

impl<T: ToDecimal + ?Sized> ToDecimal for &T {
    #[inline]
    fn to_decimal(&self) -> NumericResult<Decimal> {
        (**self).to_decimal()
    }
}

macro_rules! impl_to_decimal_for_int {
    ($($t:ty),*) => {
        $(
            impl ToDecimal for $t {
                #[inline]
                fn to_decimal(&self) -> NumericResult<Decimal> {
                    Ok(Decimal::from(*self))
                }
            }
        )*
    };
}

impl_to_decimal_for_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

macro_rules! impl_to_decimal_for_float {
    ($($t:ty => $from:ident),*) => {
        $(
            impl ToDecimal for $t {
                fn to_decimal(&self) -> NumericResult<Decimal> {
                    if !self.is_finite() {
                        return Err(NumericError::InvalidArgument);
                    }

                    Decimal::$from(*self).ok_or(NumericError::Overflow)
                }
            }
        )*
    };
}

impl_to_decimal_for_float!(f32 => from_f32_retain, f64 => from_f64_retain);

/// Convert `value` to a decimal rounded half-up to exactly `places` digits.
///
/// The result always carries `places` fractional digits, so
/// `normalize(12, 1)` displays as `12.0`.
///
/// # Errors
/// - `InvalidArgument` if `places` is negative or above [`MAX_PLACES`],
///   or if `value` is not a finite number
/// - `Overflow` if `value` cannot be represented as a `Decimal`, or if the
///   integer part leaves no room for `places` fractional digits
///
/// # Example
/// ```
/// use brew_calc::numeric::normalize;
/// use rust_decimal::Decimal;
///
/// assert_eq!(normalize(0.9876, 3).unwrap(), Decimal::new(988, 3));
/// assert_eq!(normalize(0.5, 0).unwrap(), Decimal::ONE);
/// ```
pub fn normalize(value: impl ToDecimal, places: i32) -> NumericResult<Decimal> {
    if !(0..=MAX_PLACES).contains(&places) {
        return Err(NumericError::InvalidArgument);
    }
    let places = places as u32;

    let mut rounded = value
        .to_decimal()?
        .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);

    // round_dp never adds digits; pad so the scale is exactly `places`
    rounded.rescale(places);
    if rounded.scale() != places {
        return Err(NumericError::Overflow);
    }
    Ok(rounded)
}

/// [`normalize`] with [`DEFAULT_PLACES`] fractional digits.
#[inline]
pub fn normalize_default(value: impl ToDecimal) -> NumericResult<Decimal> {
    normalize(value, DEFAULT_PLACES)
}

// ============================================================================
// Checked Arithmetic
// ============================================================================

#[inline]
pub fn checked_add(lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
    lhs.checked_add(rhs).ok_or(NumericError::Overflow)
}

#[inline]
pub fn checked_sub(lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
    lhs.checked_sub(rhs).ok_or(NumericError::Overflow)
}

#[inline]
pub fn checked_mul(lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
    lhs.checked_mul(rhs).ok_or(NumericError::Overflow)
}

/// Checked division.
///
/// # Errors
/// Returns `DivisionByZero` if `rhs` is zero, `Overflow` if the quotient
/// does not fit.
#[inline]
pub fn checked_div(lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
    if rhs.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    lhs.checked_div(rhs).ok_or(NumericError::Overflow)
}

// ============================================================================
// Tests
// ============================================================================
