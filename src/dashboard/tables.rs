//! Table views for dashboard data display.

use maud::{Markup, html};

use crate::{
    dashboard::aggregation::CategoryTotal,
    html::{CATEGORY_BADGE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency},
};

const TABLE_NUMBER_CELL_STYLE: &str = "text-right tabular-nums whitespace-nowrap";

/// Renders a table of the total and share of spending for each category.
pub(super) fn category_breakdown_table(category_totals: &[CategoryTotal]) -> Markup {
    html! {
        div class="w-full mb-8"
        {
            h3 class="text-xl font-semibold mb-4" { "Spending by Category" }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table
                    id="category-breakdown"
                    class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Total" }
                            th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Share" }
                        }
                    }

                    tbody
                    {
                        @for category in category_totals {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                th scope="row" class=(TABLE_CELL_STYLE)
                                {
                                    span class=(CATEGORY_BADGE_STYLE) { (category.category) }
                                }
                                td class={(TABLE_CELL_STYLE) " " (TABLE_NUMBER_CELL_STYLE)}
                                {
                                    (format_currency(category.total))
                                }
                                td class={(TABLE_CELL_STYLE) " " (TABLE_NUMBER_CELL_STYLE)}
                                {
                                    (format!("{:.1}%", category.percentage))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
