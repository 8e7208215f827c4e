use std::ops::{Mul, Neg};

/// Sign of a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

impl Sign {
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }

    pub fn is_positive(self) -> bool {
        self == Sign::Positive
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// Anything that can tell on which side of zero it lies.
///
/// NaN has no side and reports [`Sign::Zero`].
pub trait HasSign {
    fn sign(&self) -> Sign;
}

impl HasSign for Sign {
    fn sign(&self) -> Sign {
        *self
    }
}

macro_rules! impl_has_sign {
    ($($t: ty),*) => {
        $(
            impl HasSign for $t {
                #[inline]
                #[allow(clippy::float_cmp)]
                fn sign(&self) -> Sign {
                    if *self < (0 as $t) {
                        Sign::Negative
                    } else if *self > (0 as $t) {
                        Sign::Positive
                    } else {
                        Sign::Zero
                    }
                }
            }
        )*
    };
}

impl_has_sign!(f32, f64, i8, i16, i32, i64);
