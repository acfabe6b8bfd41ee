// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog;

/// One recorded spending transaction. `created_at` is assigned by the store
/// on insert and never rewritten; `updated_at` is refreshed on every write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input shape for create and full-replace edit. Must pass `validate`
/// before it reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub title: String,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

impl ExpenseDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(self.amount));
        }
        if catalog::category_for(&self.category).is_none() {
            return Err(ValidationError::UnknownCategory(self.category.clone()));
        }
        Ok(())
    }
}
