use crate::utils::error::{DimensionError, OverflowError, Result};

/// `stock - sales` for the item at `position`, or an error instead of wrapping.
pub fn checked_surplus(position: usize, stock: i64, sales: i64) -> std::result::Result<i64, OverflowError> {
    stock.checked_sub(sales).ok_or(OverflowError {
        position,
        stock,
        sales,
    })
}

/// Element-wise `stock[i] - sales[i]`.
///
/// Rows of different length are a `Dimension` error; nothing is truncated.
/// A difference outside `i64` is an `Overflow` error.
pub fn compute_surplus(stock: &[i64], sales: &[i64]) -> Result<Vec<i64>> {
    if stock.len() != sales.len() {
        return Err(DimensionError {
            stock_len: stock.len(),
            sales_len: sales.len(),
        }
        .into());
    }

    let surplus = stock
        .iter()
        .zip(sales.iter())
        .enumerate()
        .map(|(position, (&stock, &sales))| checked_surplus(position, stock, sales))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(surplus)
}
