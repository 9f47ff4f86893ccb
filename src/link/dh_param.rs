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
use std::fmt::{self, Display};
use std::str::FromStr;

/// Name of one of the four DH parameters of a link
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash)]
pub enum DhParam {
    /// Link length
    A,
    /// Link twist
    Alpha,
    /// Joint offset
    D,
    /// Joint angle
    Theta,
}

impl FromStr for DhParam {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "a" => Ok(DhParam::A),
            "alpha" => Ok(DhParam::Alpha),
            "d" => Ok(DhParam::D),
            "theta" => Ok(DhParam::Theta),
            _ => Err(Error::InvalidArgument(format!(
                "unknown DH parameter {name:?}"
            ))),
        }
    }
}

impl Display for DhParam {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            DhParam::A => "a",
            DhParam::Alpha => "alpha",
            DhParam::D => "d",
            DhParam::Theta => "theta",
        };
        f.write_str(name)
    }
}

#[test]
fn test_parse_dh_param() {
    assert_eq!("alpha".parse::<DhParam>().unwrap(), DhParam::Alpha);
    assert_eq!(" Theta".parse::<DhParam>().unwrap(), DhParam::Theta);
    assert_eq!(DhParam::D.to_string().parse::<DhParam>().unwrap(), DhParam::D);
    assert!("beta".parse::<DhParam>().is_err());
}
