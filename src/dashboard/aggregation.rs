//! Expense aggregation for the dashboard metrics, charts and tables.
//!
//! Everything here works on the full list of expenses returned by
//! [crate::expense::get_all_expenses], nothing is queried separately.

use std::{cmp::Ordering, collections::BTreeMap};

use time::Date;

use crate::expense::Expense;

/// The amount spent in one category.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct CategoryTotal {
    /// The category label as stored.
    pub category: String,
    /// The sum of the amounts in this category.
    pub total: f64,
    /// This category's share of all spending, 0 to 100.
    pub percentage: f64,
}

/// The amount spent in one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct MonthTotal {
    pub year: i32,
    /// 1 to 12.
    pub month: u8,
    pub total: f64,
}

impl MonthTotal {
    /// The month formatted as "YYYY-MM", e.g. "2024-01".
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Every figure shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ExpenseSummary {
    /// The number of expenses.
    pub count: usize,
    /// The sum of all amounts.
    pub total: f64,
    /// The arithmetic mean of the amounts, rounded to two decimal places.
    pub mean: f64,
    /// Totals per category, largest first. Ties are ordered by name.
    pub by_category: Vec<CategoryTotal>,
    /// Totals per month in chronological order.
    pub by_month: Vec<MonthTotal>,
}

impl ExpenseSummary {
    /// Aggregate `expenses`, or `None` if there are none to summarise.
    pub fn new(expenses: &[Expense]) -> Option<Self> {
        if expenses.is_empty() {
            return None;
        }

        let total = total_spent(expenses);

        Some(Self {
            count: expenses.len(),
            total,
            mean: mean_expense(expenses),
            by_category: sum_by_category(expenses, total),
            by_month: sum_by_month(expenses),
        })
    }

    /// The category with the highest total.
    ///
    /// When several categories share the highest total, the one that sorts
    /// first alphabetically is returned.
    pub fn top_category(&self) -> Option<&CategoryTotal> {
        self.by_category.first()
    }
}

/// The sum of all expense amounts, zero when there are none.
pub(super) fn total_spent(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// The mean expense amount rounded to two decimal places, zero when there are none.
pub(super) fn mean_expense(expenses: &[Expense]) -> f64 {
    if expenses.is_empty() {
        return 0.0;
    }

    round_to_cents(total_spent(expenses) / expenses.len() as f64)
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Sum the amounts per category, largest total first.
///
/// `grand_total` is used for each category's percentage share. Categories are
/// grouped by their exact stored label.
pub(super) fn sum_by_category(expenses: &[Expense], grand_total: f64) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();

    for expense in expenses {
        *totals.entry(expense.category.as_str()).or_insert(0.0) += expense.amount;
    }

    let mut category_totals = totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_owned(),
            total,
            percentage: if grand_total == 0.0 {
                0.0
            } else {
                total / grand_total * 100.0
            },
        })
        .collect::<Vec<_>>();

    // Stable sort keeps the alphabetical order from the BTreeMap for ties.
    category_totals.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));

    category_totals
}

/// Sum the amounts per calendar month, oldest month first.
///
/// Months without expenses are left out.
pub(super) fn sum_by_month(expenses: &[Expense]) -> Vec<MonthTotal> {
    let mut totals: BTreeMap<(i32, u8), f64> = BTreeMap::new();

    for expense in expenses {
        *totals.entry(month_key(expense.date)).or_insert(0.0) += expense.amount;
    }

    totals
        .into_iter()
        .map(|((year, month), total)| MonthTotal { year, month, total })
        .collect()
}

fn month_key(date: Date) -> (i32, u8) {
    (date.year(), u8::from(date.month()))
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use crate::expense::Expense;

    use super::{
        CategoryTotal, ExpenseSummary, MonthTotal, mean_expense, sum_by_category, sum_by_month,
        total_spent,
    };

    fn expense(amount: f64, category: &str, date: Date) -> Expense {
        Expense {
            id: 0,
            amount,
            category: category.to_owned(),
            description: String::new(),
            date,
        }
    }

    fn expenses_with_amounts(amounts: &[f64]) -> Vec<Expense> {
        amounts
            .iter()
            .map(|&amount| expense(amount, "Other", date!(2024 - 01 - 01)))
            .collect()
    }

    #[test]
    fn total_and_mean() {
        let expenses = expenses_with_amounts(&[100.0, 250.0, 50.0]);

        assert_eq!(total_spent(&expenses), 400.0);
        assert_eq!(mean_expense(&expenses), 133.33);
    }

    #[test]
    fn mean_rounds_half_up_to_cents() {
        let expenses = expenses_with_amounts(&[0.005, 0.005]);

        assert_eq!(mean_expense(&expenses), 0.01);
    }

    #[test]
    fn empty_totals_are_zero() {
        assert_eq!(total_spent(&[]), 0.0);
        assert_eq!(mean_expense(&[]), 0.0);
        assert_eq!(sum_by_category(&[], 0.0), vec![]);
        assert_eq!(sum_by_month(&[]), vec![]);
        assert_eq!(ExpenseSummary::new(&[]), None);
    }

    #[test]
    fn groups_by_category_and_finds_top() {
        let expenses = vec![
            expense(100.0, "Food", date!(2024 - 01 - 01)),
            expense(50.0, "Food", date!(2024 - 01 - 02)),
            expense(75.0, "Transport", date!(2024 - 01 - 03)),
        ];

        let summary = ExpenseSummary::new(&expenses).expect("summary for non-empty expenses");

        let totals = summary
            .by_category
            .iter()
            .map(|category| (category.category.as_str(), category.total))
            .collect::<Vec<_>>();
        assert_eq!(totals, vec![("Food", 150.0), ("Transport", 75.0)]);
        assert_eq!(
            summary.top_category().map(|top| top.category.as_str()),
            Some("Food")
        );
    }

    #[test]
    fn category_percentages_sum_to_one_hundred() {
        let expenses = vec![
            expense(30.0, "Food", date!(2024 - 01 - 01)),
            expense(10.0, "Health", date!(2024 - 01 - 01)),
        ];

        let totals = sum_by_category(&expenses, 40.0);

        assert_eq!(
            totals,
            vec![
                CategoryTotal {
                    category: "Food".to_owned(),
                    total: 30.0,
                    percentage: 75.0,
                },
                CategoryTotal {
                    category: "Health".to_owned(),
                    total: 10.0,
                    percentage: 25.0,
                },
            ]
        );
    }

    #[test]
    fn top_category_tie_picks_alphabetical_first() {
        let expenses = vec![
            expense(20.0, "Transport", date!(2024 - 01 - 01)),
            expense(20.0, "Entertainment", date!(2024 - 01 - 01)),
        ];

        let summary = ExpenseSummary::new(&expenses).unwrap();

        assert_eq!(
            summary.top_category().map(|top| top.category.as_str()),
            Some("Entertainment")
        );
    }

    #[test]
    fn groups_by_month_in_chronological_order() {
        let expenses = vec![
            expense(200.0, "Food", date!(2024 - 02 - 10)),
            expense(100.0, "Food", date!(2024 - 01 - 05)),
        ];

        let months = sum_by_month(&expenses);

        assert_eq!(
            months,
            vec![
                MonthTotal {
                    year: 2024,
                    month: 1,
                    total: 100.0,
                },
                MonthTotal {
                    year: 2024,
                    month: 2,
                    total: 200.0,
                },
            ]
        );
        assert_eq!(months[0].label(), "2024-01");
    }

    #[test]
    fn same_month_in_different_years_are_separate() {
        let expenses = vec![
            expense(1.0, "Food", date!(2024 - 03 - 01)),
            expense(2.0, "Food", date!(2023 - 03 - 31)),
            expense(4.0, "Food", date!(2024 - 03 - 31)),
        ];

        let labels_and_totals = sum_by_month(&expenses)
            .iter()
            .map(|month| (month.label(), month.total))
            .collect::<Vec<_>>();

        assert_eq!(
            labels_and_totals,
            vec![("2023-03".to_owned(), 2.0), ("2024-03".to_owned(), 5.0)]
        );
    }
}
