//! Parser for the whitespace-separated connection problem format.
//!
//! ```text
//! n m a
//! x1 y1 c1
//! ...
//! xm ym cm
//! ```
//!
//! `n` regions, `m` candidate roads, fallback cost `a`, then one road per
//! triple. Line breaks carry no meaning; tokens after the last road are
//! ignored.

use std::io::Read;
use std::str::{FromStr, SplitWhitespace};

use tracing::instrument;

use crate::error::InputError;

use super::{ConnectionProblem, Road};

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, expected: impl Fn() -> String) -> Result<T, InputError> {
        let token = self.inner.next().ok_or_else(|| InputError::MissingToken {
            expected: expected(),
        })?;
        token.parse().map_err(|_| InputError::InvalidInteger {
            token: token.to_owned(),
            expected: expected(),
        })
    }

    fn count(&mut self, field: &'static str) -> Result<usize, InputError> {
        let value: i64 = self.next(|| field.to_owned())?;
        if value < 0 {
            return Err(InputError::NegativeCount { field, value });
        }
        usize::try_from(value).map_err(|_| InputError::InvalidInteger {
            token: value.to_string(),
            expected: field.to_owned(),
        })
    }
}

/// Reads a [`ConnectionProblem`] from `reader`.
///
/// # Errors
/// Returns [`InputError`] when the stream cannot be read, ends early, holds a
/// non-integer token, or declares a negative region or road count.
///
/// # Examples
/// ```
/// use katsuo_core::regions::parse_connection_problem;
///
/// # fn main() -> Result<(), katsuo_core::InputError> {
/// let problem = parse_connection_problem("3 2 10\n1 2 5\n2 3 15\n".as_bytes())?;
/// assert_eq!(problem.region_count, 3);
/// assert_eq!(problem.roads.len(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "regions.parse", err, skip(reader))]
pub fn parse_connection_problem(mut reader: impl Read) -> Result<ConnectionProblem, InputError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|err| InputError::Read {
            message: err.to_string(),
        })?;

    let mut tokens = Tokens::new(&text);
    let region_count = tokens.count("region count")?;
    let road_count = tokens.count("road count")?;
    let fallback_cost: i64 = tokens.next(|| "fallback cost".to_owned())?;

    let mut roads = Vec::with_capacity(road_count.min(1 << 16));
    for index in 1..=road_count {
        let left: usize = tokens.next(|| format!("first region of road {index}"))?;
        let right: usize = tokens.next(|| format!("second region of road {index}"))?;
        let cost: i64 = tokens.next(|| format!("cost of road {index}"))?;
        roads.push(Road::new(left, right, cost));
    }

    Ok(ConnectionProblem {
        region_count,
        fallback_cost,
        roads,
    })
}
