use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use lazy_static::lazy_static;
use num::rational::BigRational;
use num::traits::Inv;
use num::{BigInt, Signed, Zero};
use regex::Regex;

/// Amount of money
///
/// It is important that calculations are not done with floats but with rational numbers so that
/// everything adds up correctly, also after converting between currencies.
///
/// # Examples
/// ```rust
/// use budgetbuddy::models::Amount;
///
/// let rent: Amount = "1200.5".parse().unwrap();
/// let bus: Amount = ".75".parse().unwrap();
/// assert_eq!(format!("{}", rent.clone() + bus), "1201.25");
/// assert_eq!(format!("{}", rent / 3u32), "400.17");
/// assert!("twelve".parse::<Amount>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(BigRational);

/// The text is not a plain decimal number
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0:?} is not a decimal number")]
pub struct InvalidAmount(pub String);

impl Amount {
    pub fn zero() -> Self {
        Amount(BigRational::zero())
    }
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }
    pub fn from_integer(value: i64) -> Self {
        Amount(BigRational::from(BigInt::from(value)))
    }
    pub fn as_rational(&self) -> &BigRational {
        &self.0
    }
}

impl From<BigRational> for Amount {
    fn from(value: BigRational) -> Self {
        Amount(value)
    }
}

impl FromStr for Amount {
    type Err = InvalidAmount;

    /// Parses a plain decimal: optional sign, digits and at most one decimal point
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE_DECIMAL: Regex = Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)$").unwrap();
        }
        let text = s.trim();
        if !RE_DECIMAL.is_match(text) {
            return Err(InvalidAmount(s.to_string()));
        }
        let mut num = String::new();
        let mut den = "1".to_string();
        let mut decimal = false;
        for c in text.chars() {
            match c {
                '+' => (),
                '.' => decimal = true,
                c => {
                    num.push(c);
                    if decimal {
                        den.push('0')
                    }
                }
            }
        }
        let numer = BigInt::from_str(num.as_str()).map_err(|_| InvalidAmount(s.to_string()))?;
        let denom = BigInt::from_str(den.as_str()).map_err(|_| InvalidAmount(s.to_string()))?;
        Ok(Amount(BigRational::new(numer, denom)))
    }
}

impl Display for Amount {
    /// Two decimals, rounding half away from zero
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cents = (self.0.clone() * BigInt::from(100)).round().to_integer();
        let sign = if cents.is_negative() { "-" } else { "" };
        let cents = cents.abs();
        let units = &cents / BigInt::from(100);
        let rest = (&cents % BigInt::from(100)).to_string();
        write!(f, "{}{}.{:0>2}", sign, units, rest)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}

impl Mul<&BigRational> for Amount {
    type Output = Amount;

    fn mul(self, rhs: &BigRational) -> Self::Output {
        Amount(self.0 * rhs)
    }
}

impl Div<&BigRational> for Amount {
    type Output = Amount;

    fn div(self, rhs: &BigRational) -> Self::Output {
        self * &rhs.clone().inv()
    }
}

impl Div<u32> for Amount {
    type Output = Amount;

    fn div(self, rhs: u32) -> Self::Output {
        Amount(self.0 / BigInt::from(rhs))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, x| acc + x.clone())
    }
}
