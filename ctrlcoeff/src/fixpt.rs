//! Signed 32 bit Q-format fixed point numbers.

fn scale(frac_bits: u32) -> f64 {
    2.0_f64.powi(frac_bits as i32)
}

const fn q_sat(v: i64) -> i32 {
    if v < i32::MIN as i64 {
        i32::MIN
    } else if v > i32::MAX as i64 {
        i32::MAX
    } else {
        v as i32
    }
}

fn q_sat_f64(v: f64) -> i32 {
    if v.is_nan() {
        0
    } else if v <= i32::MIN as f64 {
        i32::MIN
    } else if v >= i32::MAX as f64 {
        i32::MAX
    } else {
        v as i32
    }
}

/// Quantize `value` to a Q-format word with `frac_bits` fractional bits.
///
/// Rounds half to even and saturates to the `i32` range.
/// NaN quantizes to zero.
pub fn quantize(value: f64, frac_bits: u32) -> i32 {
    q_sat_f64((value * scale(frac_bits)).round_ties_even())
}

pub fn dequantize(q: i32, frac_bits: u32) -> f64 {
    f64::from(q) / scale(frac_bits)
}

/// Fixed point number with `FRAC` fractional bits.
///
/// `FRAC` must be below 32.
/// All arithmetic saturates. No value is reserved as an overflow marker.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Debug)]
pub struct Fixpt<const FRAC: u32>(i32);

pub type Q16 = Fixpt<16>;
pub type Q8 = Fixpt<8>;

#[allow(clippy::should_implement_trait)]
impl<const FRAC: u32> Fixpt<FRAC> {
    pub const SHIFT: u32 = FRAC;

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn from_q(q: i32) -> Self {
        Self(q)
    }

    pub const fn from_int(int: i32) -> Self {
        Self(q_sat((int as i64) << FRAC))
    }

    pub fn from_f64(value: f64) -> Self {
        Self(quantize(value, FRAC))
    }

    pub const fn to_q(self) -> i32 {
        self.0
    }

    /// Two's complement machine word.
    pub const fn to_bits(self) -> u32 {
        self.0 as u32
    }

    pub const fn to_int(self) -> i32 {
        self.0 >> FRAC
    }

    pub fn to_f64(self) -> f64 {
        dequantize(self.0, FRAC)
    }

    pub const fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub const fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    pub const fn mul(self, other: Self) -> Self {
        let prod = (self.0 as i64 * other.0 as i64) >> FRAC;
        Self(q_sat(prod))
    }

    pub const fn neg(self) -> Self {
        if self.0 == i32::MIN {
            Self(i32::MAX)
        } else {
            Self(-self.0)
        }
    }

    pub const fn abs(self) -> Self {
        if self.0 < 0 { self.neg() } else { self }
    }
}

impl<const FRAC: u32> From<i16> for Fixpt<FRAC> {
    fn from(value: i16) -> Self {
        Self::from_int(value.into())
    }
}

impl<const FRAC: u32> core::ops::Add for Fixpt<FRAC> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Fixpt::add(self, other)
    }
}

impl<const FRAC: u32> core::ops::AddAssign for Fixpt<FRAC> {
    fn add_assign(&mut self, other: Self) {
        self.0 = (*self + other).0;
    }
}

impl<const FRAC: u32> core::ops::Sub for Fixpt<FRAC> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Fixpt::sub(self, other)
    }
}

impl<const FRAC: u32> core::ops::SubAssign for Fixpt<FRAC> {
    fn sub_assign(&mut self, other: Self) {
        self.0 = (*self - other).0;
    }
}

impl<const FRAC: u32> core::ops::Mul for Fixpt<FRAC> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Fixpt::mul(self, other)
    }
}

impl<const FRAC: u32> core::ops::MulAssign for Fixpt<FRAC> {
    fn mul_assign(&mut self, other: Self) {
        self.0 = (*self * other).0;
    }
}

impl<const FRAC: u32> core::ops::Neg for Fixpt<FRAC> {
    type Output = Self;

    fn neg(self) -> Self {
        Fixpt::neg(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(0.0165, 16), 0x0439);
        assert_eq!(quantize(36.0, 16), 0x0024_0000);
        assert_eq!(quantize(0.0005 * 50e6 / 12.0, 8), 0x0008_2355);
        assert_eq!(quantize(0.0, 16), 0);
        assert_eq!(quantize(-1.0, 16), -0x1_0000);

        // ties go to even
        assert_eq!(quantize(2.5, 0), 2);
        assert_eq!(quantize(3.5, 0), 4);
        assert_eq!(quantize(-2.5, 0), -2);
        assert_eq!(quantize(0.5 / 65536.0, 16), 0);
        assert_eq!(quantize(1.5 / 65536.0, 16), 2);
    }

    #[test]
    fn test_quantize_sat() {
        assert_eq!(quantize(1e12, 16), i32::MAX);
        assert_eq!(quantize(-1e12, 16), i32::MIN);
        assert_eq!(quantize(f64::INFINITY, 16), i32::MAX);
        assert_eq!(quantize(f64::NEG_INFINITY, 8), i32::MIN);
        assert_eq!(quantize(f64::NAN, 16), 0);
    }

    #[test]
    fn test_round_trip() {
        for width in [8, 16] {
            let lsb = dequantize(1, width);
            for v in [0.0165, 0.032904, 1.0 / 3.0, 0.549227, 36.0, 2083.3333, -7.25, -0.001] {
                let back = dequantize(quantize(v, width), width);
                assert!((back - v).abs() <= lsb, "{v} -> {back}");
            }
        }
    }

    #[test]
    fn test_conv() {
        assert_eq!(Q16::from_int(3).to_q(), 3 << 16);
        assert_eq!(Q16::from_int(-3).to_int(), -3);
        assert_eq!(Q16::from(7_i16).to_int(), 7);
        assert_eq!(Q16::from_int(0x8000).to_q(), i32::MAX);
        assert_eq!(Q16::from_int(-0x8001).to_q(), i32::MIN);
        assert_eq!(Q16::from_f64(-1.0).to_bits(), 0xFFFF_0000);
        assert_eq!(Q8::from_f64(1.5).to_bits(), 0x0000_0180);
        assert_eq!(Q16::from_f64(0.25).to_f64(), 0.25);
        assert_eq!(Q16::SHIFT, 16);
        assert_eq!(Q8::SHIFT, 8);
    }

    #[test]
    fn test_add_sub() {
        let a = Q16::from_f64(1.25);
        let b = Q16::from_f64(0.5);
        assert_eq!((a + b).to_f64(), 1.75);
        assert_eq!((a - b).to_f64(), 0.75);
        assert_eq!((b - a).to_f64(), -0.75);

        let mut c = a;
        c += b;
        c -= Q16::from_int(1);
        assert_eq!(c.to_f64(), 0.75);

        let max = Q16::from_q(i32::MAX);
        let min = Q16::from_q(i32::MIN);
        assert_eq!(max + b, max);
        assert_eq!(min - b, min);
    }

    #[test]
    fn test_mul() {
        let a = Q16::from_f64(1.5);
        let b = Q16::from_f64(-2.0);
        assert_eq!((a * b).to_f64(), -3.0);
        assert_eq!((b * b).to_f64(), 4.0);

        let mut c = a;
        c *= a;
        assert_eq!(c.to_f64(), 2.25);

        let big = Q16::from_int(0x4000);
        assert_eq!((big * big).to_q(), i32::MAX);
        assert_eq!((big * -big).to_q(), i32::MIN);
    }

    #[test]
    fn test_neg_abs() {
        assert_eq!((-Q16::from_int(5)).to_int(), -5);
        assert_eq!(Q16::from_int(-5).abs().to_int(), 5);
        assert_eq!(Q16::from_int(5).abs().to_int(), 5);
        assert_eq!((-Q16::from_q(i32::MIN)).to_q(), i32::MAX);
        assert_eq!(Q16::from_q(i32::MIN).abs().to_q(), i32::MAX);
        assert!(Q16::from_int(-1) < Q16::zero());
    }
}

// vim: ts=4 sw=4 expandtab
