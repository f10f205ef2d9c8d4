use std::num::ParseFloatError;

use thiserror::Error;

use super::TrailingComponents;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComponentError {
    #[error("expected {expected} components but found {found}")]
    NotEnoughComponents { expected: usize, found: usize },
    #[error("expected {expected} components but found more")]
    TooManyComponents { expected: usize },
    #[error("invalid component: {0}")]
    InvalidComponent(#[source] ParseFloatError),
}

/// Reads the `N` leading floating point components of a line.
pub fn parse_components<'a, const N: usize>(
    components: &mut impl Iterator<Item = &'a str>,
    trailing_components: TrailingComponents,
) -> Result<[f64; N], ComponentError> {
    let mut values = [0.; N];

    for (found, value) in values.iter_mut().enumerate() {
        *value = components
            .next()
            .ok_or(ComponentError::NotEnoughComponents { expected: N, found })?
            .parse::<f64>()
            .map_err(ComponentError::InvalidComponent)?;
    }

    if trailing_components == TrailingComponents::Reject && components.next().is_some() {
        return Err(ComponentError::TooManyComponents { expected: N });
    }

    Ok(values)
}
