//! Zero-initialized array allocation.

use ndarray::{Array, Dimension};

use crate::{Error, Result};

/// Allocates a zero-filled array of shape `dim`.
///
/// Fails with [`Error::Allocation`] naming `array_name` if the memory cannot be
/// reserved or the element count overflows.
pub(crate) fn zeros<D: Dimension>(array_name: &str, dim: D) -> Result<Array<f64, D>> {
    let fail = |len| Error::Allocation {
        array_name: array_name.to_string(),
        len,
    };

    let len = dim.size_checked().ok_or_else(|| fail(usize::MAX))?;
    let mut data: Vec<f64> = Vec::new();
    data.try_reserve_exact(len).map_err(|_| fail(len))?;
    data.resize(len, 0.0);

    Array::from_shape_vec(dim, data).map_err(|_| fail(len))
}

/// Allocates an array of shape `dim` with every element set to `value`.
pub(crate) fn filled<D: Dimension>(array_name: &str, dim: D, value: f64) -> Result<Array<f64, D>> {
    let mut array = zeros(array_name, dim)?;
    array.fill(value);
    Ok(array)
}
