/*
   Copyright 2020 DarkOtter

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
use bit_lens_core::TryReserveError;
use std::error;
use std::fmt;
use std::result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The storage could not grow to hold the requested number of bits.
    Resize(TryReserveError),
}

pub type Result<T> = result::Result<T, Error>;

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Self {
        Error::Resize(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Resize(err) => Some(err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, into: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Resize(err) => write!(into, "Could not resize the bit storage: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn reserve_failure() -> TryReserveError {
        let mut words: Vec<u64> = Vec::new();
        match words.try_reserve(usize::max_value()) {
            Err(err) => err,
            Ok(()) => panic!("Reserving usize::MAX words should fail"),
        }
    }

    #[test]
    fn test_display_and_source() {
        let err = Error::from(reserve_failure());
        assert!(err.to_string().starts_with("Could not resize the bit storage: "));
        assert!(err.source().is_some());
        assert_eq!(err.clone(), err);
    }
}
