//! Cash ledger domain types.

use cajachica_shared::types::TransactionId;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::BookkeepingError;

/// Largest amount accepted, matching a NUMERIC(14,2) column.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);

/// Direction of a cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money received.
    Income,
    /// Money paid out.
    Expense,
}

impl TransactionType {
    /// Wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

/// A stored cash ledger record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashTransaction {
    /// Storage-assigned id.
    pub id: TransactionId,
    /// Income or expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// What the money was for.
    pub description: String,
    /// Positive amount in currency units, sent as an exact JSON number.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    /// Calendar date of the movement.
    pub date: NaiveDate,
    /// Storage-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Unvalidated client input for a new transaction.
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    /// Income or expense.
    pub transaction_type: Option<TransactionType>,
    /// Description.
    pub description: Option<String>,
    /// Amount.
    pub amount: Option<Decimal>,
    /// Date.
    pub date: Option<NaiveDate>,
}

/// A validated transaction, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    transaction_type: TransactionType,
    description: String,
    amount: Decimal,
    date: NaiveDate,
}

impl NewTransaction {
    /// Income or expense.
    #[must_use]
    pub const fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// Trimmed, non-empty description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Positive amount rounded to cents.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Movement date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}

impl TryFrom<TransactionDraft> for NewTransaction {
    type Error = BookkeepingError;

    fn try_from(draft: TransactionDraft) -> Result<Self, Self::Error> {
        let transaction_type = draft
            .transaction_type
            .ok_or(BookkeepingError::MissingField("type"))?;

        let description = draft
            .description
            .ok_or(BookkeepingError::MissingField("description"))?
            .trim()
            .to_string();
        if description.is_empty() {
            return Err(BookkeepingError::EmptyDescription);
        }

        // Banker's rounding to cents before the sign check, so 0.001 is rejected.
        let amount = draft
            .amount
            .ok_or(BookkeepingError::MissingField("amount"))?
            .round_dp(2);
        if amount <= Decimal::ZERO {
            return Err(BookkeepingError::NonPositiveAmount);
        }
        if amount > MAX_AMOUNT {
            return Err(BookkeepingError::AmountOutOfRange(MAX_AMOUNT));
        }

        let date = draft.date.ok_or(BookkeepingError::MissingField("date"))?;

        Ok(Self {
            transaction_type,
            description,
            amount,
            date,
        })
    }
}

/// Totals for a set of cash transactions.
///
/// `balance == total_income - total_expenses` always holds. Totals are
/// carried at two decimal places and serialized as JSON numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashSummary {
    /// Sum of income amounts.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_income: Decimal,
    /// Sum of expense amounts.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_expenses: Decimal,
    /// Income minus expenses.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
    /// Number of records reduced.
    pub count: usize,
}

impl CashSummary {
    /// Reduces a list of transactions into totals.
    #[must_use]
    pub fn from_transactions(transactions: &[CashTransaction]) -> Self {
        let total_of = |kind: TransactionType| -> Decimal {
            transactions
                .iter()
                .filter(|t| t.transaction_type == kind)
                .map(|t| t.amount)
                .sum()
        };

        let total_income = cents(total_of(TransactionType::Income));
        let total_expenses = cents(total_of(TransactionType::Expense));

        Self {
            total_income,
            total_expenses,
            balance: cents(total_income - total_expenses),
            count: transactions.len(),
        }
    }
}

/// Fixes the scale at two places so an empty sum reads `0.00`.
fn cents(mut amount: Decimal) -> Decimal {
    amount.rescale(2);
    amount
}
