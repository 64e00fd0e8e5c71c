//! Balance display formatting

use crate::config::Settings;
use crate::services::{AccountBalance, LedgerBalance};

/// Format the single-account balance, or the "no data" message
pub fn format_ledger_balance(balance: Option<&LedgerBalance>, settings: &Settings) -> String {
    let Some(balance) = balance else {
        return "No transactions to calculate balance.\n".to_string();
    };

    let symbol = &settings.currency_symbol;
    format!(
        "Income: {}\nExpenses: {}\nNet Balance: {}\n",
        balance.income.format_with_symbol(symbol),
        balance.expenses.format_with_symbol(symbol),
        balance.net.format_with_symbol(symbol)
    )
}

/// Format one account's balance breakdown
pub fn format_account_balance(name: &str, balance: &AccountBalance, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", name));
    output.push_str(&format!(
        "  Deposits:     {:>12}\n",
        balance.deposits.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Withdrawals:  {:>12}\n",
        balance.withdrawals.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Expenses:     {:>12}\n",
        balance.expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Balance:      {:>12}\n",
        balance.balance.format_with_symbol(symbol)
    ));

    output
}

/// Format balances of every account as a table
pub fn format_account_balances(balances: &[(String, AccountBalance)], settings: &Settings) -> String {
    if balances.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let symbol = &settings.currency_symbol;
    let name_width = balances
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(7)
        .max(7);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>12}  {:>12}  {:>12}\n",
        "Account",
        "Deposits",
        "Withdrawals",
        "Expenses",
        "Balance",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:->12}  {:->12}  {:->12}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for (name, balance) in balances {
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>12}  {:>12}  {:>12}\n",
            name,
            balance.deposits.format_with_symbol(symbol),
            balance.withdrawals.format_with_symbol(symbol),
            balance.expenses.format_with_symbol(symbol),
            balance.balance.format_with_symbol(symbol),
            name_width = name_width,
        ));
    }

    output
}
