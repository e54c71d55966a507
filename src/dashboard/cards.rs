//! Metric cards summarising all recorded spending.

use maud::{Markup, html};

use crate::{dashboard::aggregation::ExpenseSummary, html::format_currency};

const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-4 shadow-md flex flex-col gap-1";

/// Renders the Total Spent, Average Expense and Top Category cards.
pub(super) fn metric_cards_view(summary: &ExpenseSummary) -> Markup {
    let (top_category, top_category_detail) = match summary.top_category() {
        Some(top) => (
            top.category.clone(),
            format!(
                "{} ({:.0}% of spending)",
                format_currency(top.total),
                top.percentage
            ),
        ),
        None => ("-".to_owned(), String::new()),
    };
    let expense_count = match summary.count {
        1 => "Across 1 expense".to_owned(),
        count => format!("Across {count} expenses"),
    };

    html! {
        section class="w-full mx-auto mt-8 mb-8"
        {
            div class="grid grid-cols-1 md:grid-cols-3 gap-4"
            {
                (metric_card("Total Spent", &format_currency(summary.total), &expense_count))
                (metric_card("Average Expense", &format_currency(summary.mean), "Per expense"))
                (metric_card("Top Category", &top_category, &top_category_detail))
            }
        }
    }
}

fn metric_card(title: &str, value: &str, detail: &str) -> Markup {
    html! {
        div class=(CARD_STYLE) data-metric=(title)
        {
            h3 class="text-sm font-medium text-gray-600 dark:text-gray-400" { (title) }
            p class="text-3xl font-bold truncate" title=(value) { (value) }
            @if !detail.is_empty() {
                span class="text-sm text-gray-600 dark:text-gray-400" { (detail) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{dashboard::aggregation::ExpenseSummary, expense::Expense};

    use super::metric_cards_view;

    fn metric_value(html: &Html, title: &str) -> String {
        let selector = Selector::parse(&format!("div[data-metric=\"{title}\"] p")).unwrap();

        html.select(&selector)
            .next()
            .unwrap_or_else(|| panic!("No card found for {title}"))
            .text()
            .collect::<String>()
            .trim()
            .to_owned()
    }

    #[test]
    fn shows_total_mean_and_top_category() {
        let expenses = [(100.0, "Food"), (250.0, "Shopping"), (50.0, "Food")]
            .into_iter()
            .enumerate()
            .map(|(i, (amount, category))| Expense {
                id: i as i64 + 1,
                amount,
                category: category.to_owned(),
                description: String::new(),
                date: date!(2024 - 01 - 01),
            })
            .collect::<Vec<_>>();
        let summary = ExpenseSummary::new(&expenses).unwrap();

        let html = Html::parse_fragment(&metric_cards_view(&summary).into_string());

        assert_eq!(metric_value(&html, "Total Spent"), "$400.00");
        assert_eq!(metric_value(&html, "Average Expense"), "$133.33");
        assert_eq!(metric_value(&html, "Top Category"), "Shopping");
    }
}
