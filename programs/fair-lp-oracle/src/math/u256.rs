//! 256-bit unsigned integer used for the widened products of the fair price
//! formula.
//!
//! Only the operations the formula needs are provided: a full 128x128
//! multiply, checked addition, shifts, restoring division and a floor square
//! root. Every operation is pure integer arithmetic, so two callers given the
//! same inputs always observe the same bits.

const LOW_MASK: u128 = u64::MAX as u128;

/// Unsigned 256-bit integer stored as two `u128` limbs.
///
/// Field order is significant: the derived `Ord` compares `hi` first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256 {
    hi: u128,
    lo: u128,
}

impl U256 {
    pub const ZERO: U256 = U256 { hi: 0, lo: 0 };
    pub const ONE: U256 = U256 { hi: 0, lo: 1 };
    pub const MAX: U256 = U256 {
        hi: u128::MAX,
        lo: u128::MAX,
    };

    pub const fn from_u128(value: u128) -> Self {
        U256 { hi: 0, lo: value }
    }

    pub const fn is_zero(&self) -> bool {
        self.hi == 0 && self.lo == 0
    }

    /// The full 256-bit product of two `u128` values. Never overflows.
    pub fn full_mul(a: u128, b: u128) -> Self {
        let (a1, a0) = (a >> 64, a & LOW_MASK);
        let (b1, b0) = (b >> 64, b & LOW_MASK);

        let p00 = a0 * b0;
        let p01 = a0 * b1;
        let p10 = a1 * b0;
        let p11 = a1 * b1;

        // each term is below 2^64, so the sum fits comfortably
        let mid = (p00 >> 64) + (p01 & LOW_MASK) + (p10 & LOW_MASK);

        U256 {
            hi: p11 + (p01 >> 64) + (p10 >> 64) + (mid >> 64),
            lo: (p00 & LOW_MASK) | ((mid & LOW_MASK) << 64),
        }
    }

    pub fn checked_add(self, other: U256) -> Option<U256> {
        let (lo, carry) = self.lo.overflowing_add(other.lo);
        let hi = self.hi.checked_add(other.hi)?.checked_add(carry as u128)?;
        Some(U256 { hi, lo })
    }

    /// Multiplies by a `u128`, returning `None` if the product exceeds 256 bits.
    pub fn checked_mul_u128(self, rhs: u128) -> Option<U256> {
        let low = U256::full_mul(self.lo, rhs);
        let high = U256::full_mul(self.hi, rhs);
        if high.hi != 0 {
            return None;
        }
        low.checked_add(U256 {
            hi: high.lo,
            lo: 0,
        })
    }

    /// Wrapping subtraction; callers guarantee `self >= other`.
    fn sub(self, other: U256) -> U256 {
        let (lo, borrow) = self.lo.overflowing_sub(other.lo);
        let hi = self.hi.wrapping_sub(other.hi).wrapping_sub(borrow as u128);
        U256 { hi, lo }
    }

    /// Number of significant bits (0 for zero).
    pub fn bits(&self) -> u32 {
        if self.hi != 0 {
            256 - self.hi.leading_zeros()
        } else {
            128 - self.lo.leading_zeros()
        }
    }

    pub fn shl(self, n: u32) -> U256 {
        match n {
            0 => self,
            1..=127 => U256 {
                hi: (self.hi << n) | (self.lo >> (128 - n)),
                lo: self.lo << n,
            },
            128..=255 => U256 {
                hi: self.lo << (n - 128),
                lo: 0,
            },
            _ => U256::ZERO,
        }
    }

    pub fn shr(self, n: u32) -> U256 {
        match n {
            0 => self,
            1..=127 => U256 {
                hi: self.hi >> n,
                lo: (self.lo >> n) | (self.hi << (128 - n)),
            },
            128..=255 => U256 {
                hi: 0,
                lo: self.hi >> (n - 128),
            },
            _ => U256::ZERO,
        }
    }

    fn with_bit(self, bit: u32) -> U256 {
        if bit >= 128 {
            U256 {
                hi: self.hi | (1u128 << (bit - 128)),
                lo: self.lo,
            }
        } else {
            U256 {
                hi: self.hi,
                lo: self.lo | (1u128 << bit),
            }
        }
    }

    /// Truncating division. `None` when dividing by zero.
    pub fn checked_div(self, divisor: U256) -> Option<U256> {
        if divisor.is_zero() {
            return None;
        }
        if self < divisor {
            return Some(U256::ZERO);
        }

        let shift = self.bits() - divisor.bits();
        let mut remainder = self;
        let mut step = divisor.shl(shift);
        let mut quotient = U256::ZERO;

        for bit in (0..=shift).rev() {
            if remainder >= step {
                remainder = remainder.sub(step);
                quotient = quotient.with_bit(bit);
            }
            step = step.shr(1);
        }

        Some(quotient)
    }

    /// `floor(sqrt(self))`.
    ///
    /// Babylonian iteration `x' = (x + n / x) / 2` started from the power of
    /// two `2^ceil(bits / 2)`, which is never below the true root. From an
    /// overestimate the sequence decreases strictly until it reaches the floor
    /// root, so the loop stops at the first non-decreasing step. At most
    /// about eight rounds are needed for 256-bit inputs.
    pub fn isqrt(self) -> u128 {
        if self.hi == 0 && self.lo <= 1 {
            return self.lo;
        }

        let mut x = U256::ONE.shl((self.bits() + 1) / 2);
        loop {
            let quotient = match self.checked_div(x) {
                Some(q) => q,
                None => return 0,
            };
            // x <= 2^128 and n / x < 2^256 - 2^128 here, so the sum cannot wrap
            let next = match x.checked_add(quotient) {
                Some(sum) => sum.shr(1),
                None => return x.lo,
            };
            if next >= x {
                return x.lo;
            }
            x = next;
        }
    }
}

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        U256::from_u128(value)
    }
}

impl TryFrom<U256> for u128 {
    type Error = U256;

    fn try_from(value: U256) -> std::result::Result<u128, U256> {
        if value.hi == 0 {
            Ok(value.lo)
        } else {
            Err(value)
        }
    }
}

impl PartialEq<u128> for U256 {
    fn eq(&self, other: &u128) -> bool {
        self.hi == 0 && self.lo == *other
    }
}
