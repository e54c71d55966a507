//! Alerts for reporting failed form submissions to users.
//!
//! Alerts are HTML fragments that HTMX swaps into the `#alert-container`
//! element defined in [crate::html::base].

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

/// An error message with details on how to fix it.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    /// Shown under the message, omitted when empty.
    pub details: String,
}

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Html<String> {
        Html(self.into_markup().into_string())
    }

    fn into_markup(self) -> Markup {
        let Alert { message, details } = self;

        html! {
            div
                role="alert"
                class=(ERROR_STYLE)
            {
                div class="flex items-start justify-between gap-4"
                {
                    div
                    {
                        p class="font-medium" { (message) }

                        @if !details.is_empty() {
                            span class="text-sm" { (details) }
                        }
                    }

                    button
                        type="button"
                        aria-label="Dismiss"
                        class="text-lg leading-none"
                        onclick="this.closest('[role=alert]').remove()"
                    {
                        "×"
                    }
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.into_html()).into_response()
    }
}

const ERROR_STYLE: &str = "p-4 mb-4 rounded-lg border border-red-300 \
    bg-red-50 text-red-800 dark:bg-gray-800 dark:text-red-400 \
    dark:border-red-800";

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use scraper::Selector;

    use crate::{
        alert::Alert,
        test_utils::{assert_valid_html, parse_html_fragment},
    };

    #[tokio::test]
    async fn error_alert_shows_message_and_details() {
        let response = Alert {
            message: "Could not delete expense".to_owned(),
            details: "Try again later.".to_owned(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        let message = html
            .select(&Selector::parse("p").unwrap())
            .next()
            .expect("No alert message found")
            .text()
            .collect::<String>();
        assert_eq!(message.trim(), "Could not delete expense");

        let details = html
            .select(&Selector::parse("span").unwrap())
            .next()
            .expect("No alert details found")
            .text()
            .collect::<String>();
        assert_eq!(details.trim(), "Try again later.");
    }

    #[tokio::test]
    async fn alert_without_details_omits_them() {
        let response = Alert {
            message: "Invalid amount".to_owned(),
            details: String::new(),
        }
        .into_response();

        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        assert!(html.select(&Selector::parse("span").unwrap()).next().is_none());
    }
}
