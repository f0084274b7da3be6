use crate::core::surplus::checked_surplus;
use crate::utils::error::{DimensionError, OverflowError, ValidationError};
use serde::Serialize;

/// Number of item types tracked on every worksheet.
pub const ITEM_COUNT: usize = 6;

/// Figures entered by the operator for the last market day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalesRecord([i64; ITEM_COUNT]);

/// Most recent row of the stock worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockRecord([i64; ITEM_COUNT]);

/// Stock minus sales per item. Positive is waste, negative means demand outran stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurplusRecord([i64; ITEM_COUNT]);

impl SalesRecord {
    pub fn values(&self) -> &[i64; ITEM_COUNT] {
        &self.0
    }

    pub fn to_row(&self) -> Vec<i64> {
        self.0.to_vec()
    }
}

impl TryFrom<Vec<i64>> for SalesRecord {
    type Error = ValidationError;

    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        if let Some((position, &value)) = values.iter().enumerate().find(|(_, v)| **v < 0) {
            return Err(ValidationError::Negative { position, value });
        }

        let got = values.len();
        let values: [i64; ITEM_COUNT] =
            values.try_into().map_err(|_| ValidationError::WrongCount {
                got,
                expected: ITEM_COUNT,
            })?;
        Ok(Self(values))
    }
}

impl StockRecord {
    pub fn values(&self) -> &[i64; ITEM_COUNT] {
        &self.0
    }
}

impl TryFrom<Vec<i64>> for StockRecord {
    type Error = DimensionError;

    fn try_from(values: Vec<i64>) -> Result<Self, Self::Error> {
        let stock_len = values.len();
        let values: [i64; ITEM_COUNT] = values.try_into().map_err(|_| DimensionError {
            stock_len,
            sales_len: ITEM_COUNT,
        })?;
        Ok(Self(values))
    }
}

impl SurplusRecord {
    /// Both records are six wide, so the only possible failure is overflow.
    pub fn compute(stock: &StockRecord, sales: &SalesRecord) -> Result<Self, OverflowError> {
        let mut values = [0; ITEM_COUNT];
        for (position, slot) in values.iter_mut().enumerate() {
            *slot = checked_surplus(position, stock.0[position], sales.0[position])?;
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[i64; ITEM_COUNT] {
        &self.0
    }

    pub fn to_row(&self) -> Vec<i64> {
        self.0.to_vec()
    }
}

/// Everything one run wrote or read, handed back to the caller for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub sales: SalesRecord,
    pub stock: StockRecord,
    pub surplus: SurplusRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sales_record_requires_six_values() {
        let err = SalesRecord::try_from(vec![1, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongCount {
                got: 3,
                expected: 6
            }
        );
    }

    #[test]
    fn test_sales_record_rejects_negative_values() {
        let err = SalesRecord::try_from(vec![1, 2, -3, 4, 5, 6]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Negative {
                position: 2,
                value: -3
            }
        );
    }

    #[test]
    fn test_stock_record_wrong_length() {
        let err = StockRecord::try_from(vec![30, 30, 30, 30, 30]).unwrap_err();
        assert_eq!(err.stock_len, 5);
        assert_eq!(err.sales_len, 6);
    }

    #[test]
    fn test_surplus_record_compute() {
        let stock = StockRecord::try_from(vec![30; 6]).unwrap();
        let sales = SalesRecord::try_from(vec![10, 20, 30, 40, 50, 60]).unwrap();

        let surplus = SurplusRecord::compute(&stock, &sales).unwrap();
        assert_eq!(surplus.values(), &[20, 10, 0, -10, -20, -30]);
        assert_eq!(surplus.to_row(), vec![20, 10, 0, -10, -20, -30]);
    }

    #[test]
    fn test_surplus_record_compute_overflow() {
        let stock = StockRecord::try_from(vec![0, 0, 0, i64::MIN, 0, 0]).unwrap();
        let sales = SalesRecord::try_from(vec![0, 0, 0, 1, 0, 0]).unwrap();

        let err = SurplusRecord::compute(&stock, &sales).unwrap_err();
        assert_eq!(
            err,
            OverflowError {
                position: 3,
                stock: i64::MIN,
                sales: 1
            }
        );
    }
}
