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
use super::dh_param::*;
use super::joint_kind::*;
use super::range::*;
use crate::errors::*;
use crate::math::{make_translation, snap_in_place, Axis, Transform, SNAP_EPSILON};
use na::RealField;
use nalgebra as na;
use simba::scalar::SubsetOf;
use std::fmt::{self, Display};
use tracing::debug;

/// DH parameters of one link of the serial chain
///
/// `a` and `alpha` never change. Only one of `d` and `theta` can be changed,
/// which is selected by `JointKind` at construction. The driven variable is
/// always kept within `limits`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkParam<T: RealField> {
    a: T,
    alpha: T,
    d: T,
    theta: T,
    joint_kind: JointKind,
    limits: Range<T>,
}

impl<T> LinkParam<T>
where
    T: RealField + SubsetOf<f64>,
{
    /// Create the revolute link with the `[-pi, pi]` limits
    ///
    /// Returns `Error::OutOfRange` if `theta` is out of the limits.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravibot::link::*;
    ///
    /// let link = LinkParam::new(10.0, 0.0, 0.0, 0.0).unwrap();
    /// assert_eq!(link.joint_kind(), JointKind::Revolute);
    /// assert_eq!(link.local_transform()[(0, 3)], 10.0);
    /// assert!(LinkParam::new(10.0, 0.0, 0.0, 4.0).is_err());
    /// ```
    pub fn new(a: T, alpha: T, d: T, theta: T) -> Result<Self, Error> {
        LinkParamBuilder::new()
            .a(a)
            .alpha(alpha)
            .d(d)
            .theta(theta)
            .finalize()
    }
    /// Link length
    #[inline]
    pub fn a(&self) -> T {
        self.a.clone()
    }
    /// Link twist
    #[inline]
    pub fn alpha(&self) -> T {
        self.alpha.clone()
    }
    /// Joint offset
    #[inline]
    pub fn d(&self) -> T {
        self.d.clone()
    }
    /// Joint angle
    #[inline]
    pub fn theta(&self) -> T {
        self.theta.clone()
    }
    #[inline]
    pub fn joint_kind(&self) -> JointKind {
        self.joint_kind
    }
    #[inline]
    pub fn limits(&self) -> &Range<T> {
        &self.limits
    }
    /// The DH parameter driven by the joint
    #[inline]
    pub fn driven_param(&self) -> DhParam {
        match self.joint_kind {
            JointKind::Revolute => DhParam::Theta,
            JointKind::Prismatic => DhParam::D,
        }
    }
    /// Current value of the driven variable, `theta` or `d`
    #[inline]
    pub fn driven_value(&self) -> T {
        match self.joint_kind {
            JointKind::Revolute => self.theta.clone(),
            JointKind::Prismatic => self.d.clone(),
        }
    }
    /// Set the driven variable of the joint
    ///
    /// It returns Err if it is out of the limits, and the link is not changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravibot::link::*;
    ///
    /// let mut link = LinkParamBuilder::new()
    ///     .d(1.0)
    ///     .limits((-1.0..=1.0).into())
    ///     .finalize()
    ///     .unwrap();
    /// link.set_driven_value(0.5).unwrap();
    /// assert_eq!(link.theta(), 0.5);
    /// assert_eq!(link.d(), 1.0);
    /// assert!(link.set_driven_value(1.5).is_err());
    /// assert_eq!(link.theta(), 0.5);
    /// ```
    pub fn set_driven_value(&mut self, value: T) -> Result<(), Error> {
        self.limits.check(value.clone())?;
        debug!(
            param = %self.driven_param(),
            value = na::convert::<T, f64>(value.clone()),
            "set driven value"
        );
        match self.joint_kind {
            JointKind::Revolute => self.theta = value,
            JointKind::Prismatic => self.d = value,
        }
        Ok(())
    }
    /// Set the parameter addressed by its name
    ///
    /// Only the driven parameter can be written. The others are read-only.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravibot::link::*;
    /// use gravibot::Error;
    ///
    /// let mut link = LinkParam::new(1.0, 2.0, 3.0, 0.0).unwrap();
    /// link.set_param(DhParam::Theta, 0.1).unwrap();
    /// assert!(matches!(
    ///     link.set_param(DhParam::A, 0.1),
    ///     Err(Error::ReadOnlyField { field: DhParam::A })
    /// ));
    /// assert!(link.set_param(DhParam::D, 0.1).is_err());
    /// ```
    pub fn set_param(&mut self, param: DhParam, value: T) -> Result<(), Error> {
        if param != self.driven_param() {
            return Err(Error::ReadOnlyField { field: param });
        }
        self.set_driven_value(value)
    }
    /// Returns the value of the parameter addressed by its name
    pub fn param(&self, param: DhParam) -> T {
        match param {
            DhParam::A => self.a(),
            DhParam::Alpha => self.alpha(),
            DhParam::D => self.d(),
            DhParam::Theta => self.theta(),
        }
    }
    /// Calculate the transform from the previous link frame to this link frame
    ///
    /// `Rz(theta) * Tz(d) * Tx(a) * Rx(alpha)`. The tiny entries coming from
    /// `sin`/`cos` are replaced with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravibot::link::*;
    ///
    /// let link = LinkParam::new(0.0, std::f64::consts::FRAC_PI_2, 10.0, 0.0).unwrap();
    /// let trans = link.local_transform();
    /// assert_eq!(trans[(2, 3)], 10.0);
    /// assert_eq!(trans[(1, 1)], 0.0);
    /// assert_eq!(trans[(1, 2)], -1.0);
    /// ```
    pub fn local_transform(&self) -> Transform<T> {
        let mut trans = Axis::Z.rotation(self.theta.clone())
            * make_translation(T::zero(), T::zero(), self.d.clone())
            * make_translation(self.a.clone(), T::zero(), T::zero())
            * Axis::X.rotation(self.alpha.clone());
        snap_in_place(&mut trans, na::convert(SNAP_EPSILON));
        trans
    }
}

impl<T: RealField> Display for LinkParam<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "a={} alpha={} d={} theta={} {} {}",
            self.a, self.alpha, self.d, self.theta, self.joint_kind, self.limits
        )
    }
}

/// Build `LinkParam` with the defaults of the revolute joint
///
/// # Examples
///
/// ```
/// use gravibot::link::*;
///
/// let link = LinkParamBuilder::new()
///     .a(0.5)
///     .theta(0.2)
///     .joint_kind(JointKind::Prismatic)
///     .limits(Range::new(0.0, 2.0))
///     .finalize()
///     .unwrap();
/// assert_eq!(link.driven_value(), 0.0);
/// assert_eq!(link.theta(), 0.2);
/// ```
#[derive(Debug, Clone)]
pub struct LinkParamBuilder<T: RealField> {
    a: T,
    alpha: T,
    d: T,
    theta: T,
    joint_kind: JointKind,
    limits: Range<T>,
}

impl<T> Default for LinkParamBuilder<T>
where
    T: RealField + SubsetOf<f64>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkParamBuilder<T>
where
    T: RealField + SubsetOf<f64>,
{
    pub fn new() -> LinkParamBuilder<T> {
        LinkParamBuilder {
            a: T::zero(),
            alpha: T::zero(),
            d: T::zero(),
            theta: T::zero(),
            joint_kind: JointKind::Revolute,
            limits: Range::full_turn(),
        }
    }
    /// Set the link length
    pub fn a(mut self, a: T) -> LinkParamBuilder<T> {
        self.a = a;
        self
    }
    /// Set the link twist
    pub fn alpha(mut self, alpha: T) -> LinkParamBuilder<T> {
        self.alpha = alpha;
        self
    }
    /// Set the joint offset
    pub fn d(mut self, d: T) -> LinkParamBuilder<T> {
        self.d = d;
        self
    }
    /// Set the joint angle
    pub fn theta(mut self, theta: T) -> LinkParamBuilder<T> {
        self.theta = theta;
        self
    }
    pub fn joint_kind(mut self, joint_kind: JointKind) -> LinkParamBuilder<T> {
        self.joint_kind = joint_kind;
        self
    }
    /// Set the limits of the driven variable
    ///
    /// `Range::new` and `From<RangeInclusive>` panic if the minimum is greater
    /// than the maximum, so build the range from checked values.
    pub fn limits(mut self, limits: Range<T>) -> LinkParamBuilder<T> {
        self.limits = limits;
        self
    }
    /// Create `LinkParam` instance
    ///
    /// Returns `Error::OutOfRange` if the initial driven value is out of the
    /// limits.
    pub fn finalize(self) -> Result<LinkParam<T>, Error> {
        let link = LinkParam {
            a: self.a,
            alpha: self.alpha,
            d: self.d,
            theta: self.theta,
            joint_kind: self.joint_kind,
            limits: self.limits,
        };
        link.limits.check(link.driven_value())?;
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_revolute_drives_theta() {
        let mut link = LinkParam::new(1.0, 2.0, 3.0, FRAC_PI_2).unwrap();
        assert_eq!(link.a(), 1.0);
        assert_eq!(link.alpha(), 2.0);
        link.set_driven_value(0.25).unwrap();
        assert_eq!(link.theta(), 0.25);
        assert_eq!(link.d(), 3.0);
        link.set_driven_value(PI).unwrap();
        link.set_driven_value(-PI).unwrap();
        assert!(matches!(
            link.set_driven_value(3.2),
            Err(Error::OutOfRange { value, .. }) if value == 3.2
        ));
        assert!(link.set_driven_value(-3.2).is_err());
        assert!(link.set_driven_value(f64::NAN).is_err());
        assert_eq!(link.theta(), -PI);
        assert_eq!(link.a(), 1.0);
        assert_eq!(link.alpha(), 2.0);
    }

    #[test]
    fn test_prismatic_drives_d() {
        let mut link = LinkParamBuilder::new()
            .a(1.0)
            .theta(0.5)
            .joint_kind(JointKind::Prismatic)
            .limits(Range::new(0.0, 10.0))
            .finalize()
            .unwrap();
        assert_eq!(link.driven_param(), DhParam::D);
        link.set_param(DhParam::D, 4.0).unwrap();
        assert_eq!(link.d(), 4.0);
        assert_eq!(link.theta(), 0.5);
        assert!(matches!(
            link.set_param(DhParam::Theta, 0.1),
            Err(Error::ReadOnlyField {
                field: DhParam::Theta
            })
        ));
        assert!(link.set_driven_value(-0.1).is_err());
        assert_eq!(link.d(), 4.0);
        assert_relative_eq!(link.local_transform()[(2, 3)], 4.0);
    }

    #[test]
    fn test_initial_value_outside_limits() {
        assert!(matches!(
            LinkParam::new(0.0, 0.0, 0.0, 4.0),
            Err(Error::OutOfRange { value, .. }) if value == 4.0
        ));
        assert!(LinkParam::new(0.0, 0.0, 0.0, PI).is_ok());
        let prismatic = LinkParamBuilder::new()
            .d(3.0)
            .theta(10.0)
            .joint_kind(JointKind::Prismatic)
            .limits(Range::new(0.0, 2.0));
        assert!(matches!(
            prismatic.clone().finalize(),
            Err(Error::OutOfRange { value, .. }) if value == 3.0
        ));
        // theta is not driven, so it is not limited
        assert!(prismatic.d(1.0).finalize().is_ok());
    }

    #[test]
    fn test_read_only_params() {
        let mut link = LinkParam::new(1.0, 2.0, 3.0, 0.0).unwrap();
        for param in [DhParam::A, DhParam::Alpha, DhParam::D] {
            assert!(matches!(
                link.set_param(param, 0.1),
                Err(Error::ReadOnlyField { field }) if field == param
            ));
        }
        assert_eq!(link.param(DhParam::A), 1.0);
        assert_eq!(link.param(DhParam::Alpha), 2.0);
        assert_eq!(link.param(DhParam::D), 3.0);
    }

    #[test]
    fn test_local_transform_order() {
        let link = LinkParam::new(2.0, 0.3, 1.5, 0.7).unwrap();
        let expected = Axis::Z.rotation(0.7)
            * make_translation(0.0, 0.0, 1.5)
            * make_translation(2.0, 0.0, 0.0)
            * Axis::X.rotation(0.3);
        assert_relative_eq!(link.local_transform(), expected, epsilon = 1e-12);
        // theta rotates the a offset in the xy plane
        assert_relative_eq!(link.local_transform()[(0, 3)], 2.0 * 0.7f64.cos());
        assert_relative_eq!(link.local_transform()[(1, 3)], 2.0 * 0.7f64.sin());
    }

    #[test]
    fn test_local_transform_is_snapped() {
        let link = LinkParam::new(10.0, -FRAC_PI_2, 0.0, FRAC_PI_2).unwrap();
        let trans = link.local_transform();
        assert_eq!(trans[(0, 0)], 0.0);
        assert_eq!(trans[(0, 3)], 0.0);
        assert_eq!(trans[(1, 3)], 10.0);
    }
}
