/*
  Copyright 2020 Takashi Ogura

  Licensed under the Apache License, Version 2.0 (the "License");
  you may not use this file except in compliance with the License.
  You may obtain a copy of the License at

      http://www.apache.org/licenses/LICENSE-2.0

  Unless required by applicable law or agreed to in writing, software
  distributed under the License is distributed on an "AS IS" BASIS,
  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
  See the License for the specific language governing permissions and
  limitations under the License.
*/
use crate::errors::*;
use na::RealField;
use nalgebra as na;
use simba::scalar::SubsetOf;
use std::fmt::{self, Display};

/// Inclusive bounds of the driven joint variable
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct Range<T: RealField> {
    pub min: T,
    pub max: T,
}

impl<T> Range<T>
where
    T: RealField,
{
    /// Create new Range instance
    ///
    /// In case `min` is greater than `max`, this function panics.
    ///
    /// # Examples
    ///
    /// ```
    /// let range = gravibot::link::Range::new(-1.0, 1.0);
    /// // let range = gravibot::link::Range::new(1.0, -1.0);  // panic
    /// ```
    pub fn new(min: T, max: T) -> Self {
        assert!(min <= max, "min must be less than or equal to max");
        Range { min, max }
    }
    /// Full turn range `[-pi, pi]`, which is the default of the revolute link
    pub fn full_turn() -> Self {
        Range {
            min: -T::pi(),
            max: T::pi(),
        }
    }
    /// Check if the value is in the range
    ///
    /// The limit values themselves are valid.
    ///
    /// # Examples
    ///
    /// ```
    /// let range = gravibot::link::Range::new(-1.0, 1.0);
    /// assert!(range.is_valid(0.0));
    /// assert!(range.is_valid(1.0));
    /// assert!(!range.is_valid(1.5));
    /// assert!(!range.is_valid(f64::NAN));
    /// ```
    pub fn is_valid(&self, val: T) -> bool {
        val <= self.max && val >= self.min
    }
}

impl<T> Range<T>
where
    T: RealField + SubsetOf<f64>,
{
    /// Returns `Error::OutOfRange` if the value is not in the range
    ///
    /// # Examples
    ///
    /// ```
    /// use gravibot::link::Range;
    /// use gravibot::Error;
    ///
    /// let range = Range::new(0.0, 2.0);
    /// assert!(range.check(2.0).is_ok());
    /// assert!(matches!(
    ///     range.check(2.5),
    ///     Err(Error::OutOfRange { value, min, max }) if value == 2.5 && min == 0.0 && max == 2.0
    /// ));
    /// ```
    pub fn check(&self, val: T) -> Result<(), Error> {
        if self.is_valid(val.clone()) {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                value: na::convert(val),
                min: na::convert(self.min.clone()),
                max: na::convert(self.max.clone()),
            })
        }
    }
}

impl<T> From<::std::ops::RangeInclusive<T>> for Range<T>
where
    T: RealField,
{
    /// # Panics
    ///
    /// Panics if the start is greater than the end, like `Range::new`.
    ///
    /// # Examples
    ///
    /// ```
    /// let range: gravibot::link::Range<f64> = (-1.0..=1.0).into();
    /// assert!(range.is_valid(1.0));
    /// assert!(!range.is_valid(1.5));
    /// ```
    fn from(range: ::std::ops::RangeInclusive<T>) -> Self {
        let (min, max) = range.into_inner();
        Range::new(min, max)
    }
}

impl<T: RealField> Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[test]
fn test_check_is_inclusive() {
    let range = Range::new(-0.5, 2.0);
    assert!(range.check(-0.5).is_ok());
    assert!(range.check(2.0).is_ok());
    assert!(matches!(
        range.check(-0.6),
        Err(Error::OutOfRange { min, max, .. }) if min == -0.5 && max == 2.0
    ));
    assert!(range.check(f64::NAN).is_err());
}

#[test]
fn test_full_turn() {
    let range = Range::<f64>::full_turn();
    assert!(range.is_valid(std::f64::consts::PI));
    assert!(range.is_valid(-std::f64::consts::PI));
    assert!(!range.is_valid(3.2));
}

#[test]
#[should_panic(expected = "min must be less than or equal to max")]
fn test_inverted_range_panics() {
    let _range: Range<f64> = (1.0..=-1.0).into();
}
