//! HTML rendering for the account page.

use maud::{Markup, html};
use rust_decimal::Decimal;
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    account::{Account, Transaction, TransactionKind},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        KIND_BADGE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, format_currency, link,
    },
    pagination::PaginationIndicator,
};

use super::{
    page::{AccountPageViewModel, FilterLink, PagerItem},
    query::{LedgerQueryResult, format_day},
};

/// The max number of graphemes to display in the transaction table rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

const DATE_ATTRIBUTE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

fn amount_class(amount: Decimal) -> &'static str {
    if amount.is_sign_negative() {
        "text-red-700 dark:text-red-300"
    } else {
        "text-green-700 dark:text-green-300"
    }
}

fn kind_badge_class(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Deposit => "text-green-800 bg-green-100 dark:bg-green-900 dark:text-green-300",
        TransactionKind::Withdrawal => "text-red-800 bg-red-100 dark:bg-red-900 dark:text-red-300",
    }
}

pub(crate) fn account_page_view(model: &AccountPageViewModel) -> Markup {
    let result = &model.result;

    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-6 w-full lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Account Details" }
                }

                (lookup_form(model.entered_account_id.unwrap_or_default()))

                @match (result.account, model.entered_account_id) {
                    (Some(account), _) => {
                        (account_summary_view(account))
                        (statistics_view(result))
                        (type_filter_view(&model.filter_links))
                        (transactions_table_view(&result.transactions_page))
                        (pager_view(&model.pager))
                    }
                    (None, Some(entered_account_id)) => {
                        p
                            class="rounded-lg border border-dashed border-gray-300 bg-white px-4 py-6 text-center text-sm text-gray-500 dark:border-gray-700 dark:bg-gray-800 dark:text-gray-400"
                            data-not-found="true"
                        {
                            "No account found with the number \"" (entered_account_id) "\". "
                            (link(endpoints::ACCOUNT_VIEW, "Start again"))
                        }
                    }
                    (None, None) => {}
                }
            }
        }
    };

    base("Account Details", &content)
}

fn lookup_form(account_id: &str) -> Markup {
    html! {
        form
            method="post"
            action=(endpoints::ACCOUNT_VIEW)
            class="flex flex-wrap items-end gap-4"
        {
            div class="grow"
            {
                label for="accountId" class=(FORM_LABEL_STYLE) { "Account number" }

                input
                    type="text"
                    name="accountId"
                    id="accountId"
                    placeholder="C00123456"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required
                    autofocus
                    value=(account_id);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Search" }
        }
    }
}

fn account_summary_view(account: &Account) -> Markup {
    let detail = |label: &str, value: Markup| {
        html! {
            div
            {
                dt class="text-sm text-gray-500 dark:text-gray-400" { (label) }
                dd class="font-medium" { (value) }
            }
        }
    };

    html! {
        section class=(CARD_STYLE) data-account-summary="true"
        {
            h2 class="text-lg font-semibold mb-3" { (account.number) }

            dl class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4"
            {
                (detail("Holder", html! { (account.holder) }))
                (detail("Type", html! { (account.category) }))
                (detail("Opened", time_label(account.created_at)))
                (detail("Balance", html! {
                    span class=(amount_class(account.balance)) { (format_currency(account.balance)) }
                }))
                (detail("Status", html! { (account.status) }))
                (detail("Unlocks", time_label(account.unlock_date)))
            }
        }
    }
}

fn statistics_view(result: &LedgerQueryResult) -> Markup {
    let stat_card = |name: &str, label: &str, value: Markup| {
        html! {
            dl class=(CARD_STYLE) data-stat=(name)
            {
                dt class="text-sm text-gray-500 dark:text-gray-400" { (label) }
                dd class="text-2xl font-semibold tabular-nums" { (value) }
            }
        }
    };

    html! {
        section class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4"
        {
            (stat_card("total-deposits", "Total deposits", html! {
                span class="text-green-700 dark:text-green-300"
                { (format_currency(result.total_deposits)) }
            }))
            (stat_card("total-withdrawals", "Total withdrawals", html! {
                span class="text-red-700 dark:text-red-300"
                { (format_currency(result.total_withdrawals)) }
            }))
            (stat_card("transaction-count", "Transactions", html! { (result.transaction_count) }))
            (stat_card(
                "last-transaction-date",
                "Last transaction",
                html! { (result.last_transaction_date) },
            ))
        }
    }
}

fn type_filter_view(filter_links: &[FilterLink]) -> Markup {
    html! {
        nav class="flex gap-4 text-sm" aria-label="Transaction type" data-type-filter="true"
        {
            @for filter_link in filter_links {
                @if filter_link.is_active {
                    a
                        href=(filter_link.href)
                        aria-current="page"
                        class="font-semibold text-gray-900 dark:text-white"
                    { (filter_link.label) }
                } @else {
                    a href=(filter_link.href) class=(LINK_STYLE) { (filter_link.label) }
                }
            }
        }
    }
}

fn transactions_table_view(transactions: &[&Transaction]) -> Markup {
    html! {
        section class="w-full overflow-x-auto rounded dark:bg-gray-800"
        {
            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                        th scope="col" class="px-6 py-3 text-right" { "Amount" }
                        th scope="col" class="px-6 py-3 text-right" { "Balance" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        (transaction_row_view(transaction))
                    }

                    @if transactions.is_empty() {
                        tr
                        {
                            td
                                colspan="5"
                                data-empty-state="true"
                                class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
                            {
                                "No transactions to show."
                            }
                        }
                    }
                }
            }
        }
    }
}

fn transaction_row_view(transaction: &Transaction) -> Markup {
    let (description, tooltip) = format_description(&transaction.description);

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-row="true"
        {
            td class=(TABLE_CELL_STYLE) { (time_label(transaction.timestamp)) }
            td class=(TABLE_CELL_STYLE)
            {
                span class={ (KIND_BADGE_STYLE) " " (kind_badge_class(transaction.kind)) }
                { (transaction.kind) }
            }
            td class={ "px-6 py-4 text-right tabular-nums " (amount_class(transaction.amount)) }
            { (format_currency(transaction.amount)) }
            td class="px-6 py-4 text-right tabular-nums"
            { (format_currency(transaction.balance_after)) }
            td class=(TABLE_CELL_STYLE) title=[tooltip] { (description) }
        }
    }
}

fn pager_view(pager: &[PagerItem]) -> Markup {
    let link_style = "block px-3 py-2 rounded-sm text-blue-600 hover:underline";

    html! {
        @if !pager.is_empty() {
            nav class="pagination flex justify-center" aria-label="Pages"
            {
                ul class="pagination flex items-center gap-1"
                {
                    @for item in pager {
                        li
                        {
                            @match (item.indicator, &item.href) {
                                (PaginationIndicator::CurrPage(page), _) => {
                                    span
                                        aria-current="page"
                                        class="block px-3 py-2 rounded-sm font-bold text-black dark:text-white"
                                    { (page) }
                                }
                                (PaginationIndicator::Ellipsis, _) => {
                                    span class="block px-3 py-2" { "…" }
                                }
                                (PaginationIndicator::Page(page), Some(href)) => {
                                    a href=(href) class=(link_style) { (page) }
                                }
                                (PaginationIndicator::BackButton(_), Some(href)) => {
                                    a href=(href) role="button" class=(link_style) { "Back" }
                                }
                                (PaginationIndicator::NextButton(_), Some(href)) => {
                                    a href=(href) role="button" class=(link_style) { "Next" }
                                }
                                (_, None) => {}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn time_label(timestamp: OffsetDateTime) -> Markup {
    let datetime = timestamp
        .format(DATE_ATTRIBUTE_FORMAT)
        .unwrap_or_else(|_| timestamp.date().to_string());

    html! {
        time datetime=(datetime) { (format_day(timestamp)) }
    }
}

fn format_description(description: &str) -> (String, Option<&str>) {
    let description_length = description.graphemes(true).count();

    if description_length <= MAX_DESCRIPTION_GRAPHEMES {
        (description.to_owned(), None)
    } else {
        let truncated: String = description
            .graphemes(true)
            .take(MAX_DESCRIPTION_GRAPHEMES - 3)
            .collect();
        (truncated + "...", Some(description))
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_DESCRIPTION_GRAPHEMES, format_description};

    #[test]
    fn short_description_is_unchanged() {
        let (description, tooltip) = format_description("Salary transfer");

        assert_eq!(description, "Salary transfer");
        assert_eq!(tooltip, None);
    }

    #[test]
    fn long_description_is_truncated_with_tooltip() {
        let long = "é".repeat(MAX_DESCRIPTION_GRAPHEMES + 1);

        let (description, tooltip) = format_description(&long);

        assert_eq!(description.chars().count(), MAX_DESCRIPTION_GRAPHEMES);
        assert!(description.ends_with("..."));
        assert_eq!(tooltip, Some(long.as_str()));
    }
}
