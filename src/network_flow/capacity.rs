use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Numeric type an edge capacity (and a flow) can be expressed in.
///
/// Only signed types qualify: the flow matrix stores the reverse direction
/// of every pushed unit as a negative entry.
pub trait Capacity:
    Copy
    + Default
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
{
    const ZERO: Self;
    /// Starting value of the running bottleneck minimum, no residual capacity exceeds it.
    const UNBOUNDED: Self;

    /// Finite and non-negative.
    fn is_valid_capacity(self) -> bool;

    /// `None` when the sum is not representable (integer overflow, or a non-finite float).
    fn checked_sum(self, rhs: Self) -> Option<Self>;

    /// Equality up to accumulated rounding. Exact for integers, relative
    /// tolerance of `sqrt(EPSILON)` for floats.
    fn approx_eq(self, rhs: Self) -> bool;

    fn min_of(self, rhs: Self) -> Self {
        if rhs < self { rhs } else { self }
    }
}

macro_rules! impl_integer_capacity {
    ($($t:ty),*) => {$(
        impl Capacity for $t {
            const ZERO: Self = 0;
            const UNBOUNDED: Self = <$t>::MAX;
            fn is_valid_capacity(self) -> bool {
                self >= 0
            }
            fn checked_sum(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }
            fn approx_eq(self, rhs: Self) -> bool {
                self == rhs
            }
        }
    )*};
}

macro_rules! impl_float_capacity {
    ($($t:ty),*) => {$(
        impl Capacity for $t {
            const ZERO: Self = 0.0;
            const UNBOUNDED: Self = <$t>::INFINITY;
            fn is_valid_capacity(self) -> bool {
                self.is_finite() && self >= 0.0
            }
            fn checked_sum(self, rhs: Self) -> Option<Self> {
                let sum = self + rhs;
                sum.is_finite().then_some(sum)
            }
            fn approx_eq(self, rhs: Self) -> bool {
                let scale = self.abs().max(rhs.abs()).max(1.0);
                (self - rhs).abs() <= <$t>::EPSILON.sqrt() * scale
            }
        }
    )*};
}

impl_integer_capacity!(i8, i16, i32, i64, i128, isize);
impl_float_capacity!(f32, f64);
