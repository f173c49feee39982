//! Input construction: random data and user-supplied value lists

use crate::config::{check_element_count, Config};
use crate::errors::{Result, SortError};
use crate::model::Element;
use rand::Rng;

/// `config.node_count` elements with ids `0..count` and values drawn
/// uniformly from `[config.min_value, config.max_value]`.
///
/// Fails with [`SortError::InvalidConfig`] on an empty value range or an
/// oversized count, so an unvalidated `Config` cannot reach `gen_range`.
pub fn random_elements<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<Vec<Element>> {
    check_element_count(config.node_count)?;
    config.check_value_range()?;
    Ok((0..config.node_count)
        .map(|id| Element::new(id, rng.gen_range(config.min_value..=config.max_value)))
        .collect())
}

/// Parse a comma- or whitespace-separated list of integers, e.g. `"5,3,4 1"`.
/// Lists longer than [`crate::config::MAX_NODE_COUNT`] are rejected.
pub fn parse_values(input: &str) -> Result<Vec<Element>> {
    let values = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| SortError::InvalidValue {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<i64>>>()?;
    check_element_count(values.len())?;
    Ok(Element::from_values(&values))
}
