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
use crate::link::*;
use na::RealField;
use nalgebra as na;
use simba::scalar::SubsetOf;
use std::fmt::{self, Display};
use tracing::debug;

/// Ordered links of the serial manipulator, from the base to the tip
///
/// # Examples
///
/// ```
/// use gravibot::*;
/// use std::f64::consts::FRAC_PI_2;
///
/// let mut param = RobotParam::new();
/// param.add_link(LinkParam::new(0.0, FRAC_PI_2, 10.0, 0.0).unwrap());
/// param.add_link(LinkParam::new(10.0, -FRAC_PI_2, 0.0, 0.0).unwrap());
/// param.add_link(LinkParam::new(10.0, 0.0, 0.0, 0.0).unwrap());
/// assert_eq!(param.count(), 3);
///
/// param.set_joint_value(1, 0.5).unwrap();
/// assert_eq!(param.get_link(1).unwrap().theta(), 0.5);
/// assert!(param.set_joint_value(3, 0.5).is_err());
/// assert!(param.set_joint_value(0, 4.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RobotParam<T: RealField> {
    links: Vec<LinkParam<T>>,
}

impl<T> Default for RobotParam<T>
where
    T: RealField + SubsetOf<f64>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RobotParam<T>
where
    T: RealField + SubsetOf<f64>,
{
    /// Create empty chain
    pub fn new() -> Self {
        RobotParam { links: Vec::new() }
    }
    /// Create chain from the links ordered from the base
    pub fn from_links(links: Vec<LinkParam<T>>) -> Self {
        RobotParam { links }
    }
    /// Append the link at the tip
    pub fn add_link(&mut self, link: LinkParam<T>) {
        debug!(index = self.links.len(), link = %link, "add link");
        self.links.push(link);
    }
    /// Number of the links
    #[inline]
    pub fn count(&self) -> usize {
        self.links.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
    pub(crate) fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.links.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                count: self.links.len(),
            })
        }
    }
    /// Get the link, the index starts from 0 at the base
    pub fn get_link(&self, index: usize) -> Result<&LinkParam<T>, Error> {
        self.check_index(index)?;
        Ok(&self.links[index])
    }
    /// Set the driven variable of the `index`-th link
    ///
    /// The limits are checked by `LinkParam::set_driven_value`.
    pub fn set_joint_value(&mut self, index: usize, value: T) -> Result<(), Error> {
        self.check_index(index)?;
        debug!(index, "set joint value");
        self.links[index].set_driven_value(value)
    }
    /// Iterate the links from the base
    pub fn iter(&self) -> impl Iterator<Item = &LinkParam<T>> {
        self.links.iter()
    }
    /// Get the driven values of all links
    pub fn joint_values(&self) -> Vec<T> {
        self.iter().map(|link| link.driven_value()).collect()
    }
    /// Set the driven values of all links
    ///
    /// The number of values must be equal to `count()`. All values are
    /// checked before any link is changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravibot::*;
    ///
    /// let mut param: RobotParam<f64> = vec![
    ///     LinkParam::new(1.0, 0.0, 0.0, 0.0).unwrap(),
    ///     LinkParam::new(1.0, 0.0, 0.0, 0.0).unwrap(),
    /// ]
    /// .into_iter()
    /// .collect();
    /// param.set_joint_values(&[0.1, 0.2]).unwrap();
    /// assert_eq!(param.joint_values(), vec![0.1, 0.2]);
    /// assert!(param.set_joint_values(&[0.3, 5.0]).is_err());
    /// assert_eq!(param.joint_values(), vec![0.1, 0.2]);
    /// ```
    pub fn set_joint_values(&mut self, values: &[T]) -> Result<(), Error> {
        if values.len() != self.links.len() {
            return Err(Error::SizeMismatch {
                input: values.len(),
                required: self.links.len(),
            });
        }
        for (link, value) in self.links.iter().zip(values.iter()) {
            link.limits().check(value.clone())?;
        }
        for (link, value) in self.links.iter_mut().zip(values.iter()) {
            link.set_driven_value(value.clone())?;
        }
        Ok(())
    }
}

impl<T> FromIterator<LinkParam<T>> for RobotParam<T>
where
    T: RealField + SubsetOf<f64>,
{
    fn from_iter<I: IntoIterator<Item = LinkParam<T>>>(iter: I) -> Self {
        RobotParam::from_links(iter.into_iter().collect())
    }
}

impl<T: RealField> Display for RobotParam<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, link) in self.links.iter().enumerate() {
            writeln!(f, "{i}: {link}")?;
        }
        Ok(())
    }
}
