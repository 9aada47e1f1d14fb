//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults, so
//! tests specify only the fields they care about.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, OrderId};
use domain_ledger::{CompletedOrder, EntryDraft, EntryRef, Invoice, InvoiceItem, InvoiceKind, PaymentMethod};

use crate::fixtures::DateFixtures;

/// Builder for journal entry drafts
pub struct EntryDraftBuilder {
    date: NaiveDate,
    memo: String,
    currency: Currency,
    reference: EntryRef,
    lines: Vec<(String, Decimal, Decimal)>,
}

impl Default for EntryDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryDraftBuilder {
    /// Creates a builder with a balanced cash sale by default
    pub fn new() -> Self {
        Self {
            date: DateFixtures::accounting_date(),
            memo: "Test entry".to_string(),
            currency: Currency::EUR,
            reference: EntryRef::manual(),
            lines: vec![
                ("cash".to_string(), dec!(100), Decimal::ZERO),
                ("sales".to_string(), Decimal::ZERO, dec!(100)),
            ],
        }
    }

    /// Sets the accounting date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the memo
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// Sets the currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the reference
    pub fn with_reference(mut self, reference: EntryRef) -> Self {
        self.reference = reference;
        self
    }

    /// Replaces the lines with the given (account, debit, credit) triples
    pub fn with_lines(mut self, lines: Vec<(&str, Decimal, Decimal)>) -> Self {
        self.lines = lines
            .into_iter()
            .map(|(account, debit, credit)| (account.to_string(), debit, credit))
            .collect();
        self
    }

    /// Adds a debit line
    pub fn debit(mut self, account: &str, amount: Decimal) -> Self {
        self.lines.push((account.to_string(), amount, Decimal::ZERO));
        self
    }

    /// Adds a credit line
    pub fn credit(mut self, account: &str, amount: Decimal) -> Self {
        self.lines.push((account.to_string(), Decimal::ZERO, amount));
        self
    }

    /// Clears all lines
    pub fn without_lines(mut self) -> Self {
        self.lines.clear();
        self
    }

    /// Builds the draft
    pub fn build(self) -> EntryDraft {
        let mut draft = EntryDraft::new(self.date, self.memo).with_reference(self.reference);
        for (account, debit, credit) in self.lines {
            draft = draft.line(domain_ledger::JournalLine {
                account_id: account.into(),
                debit: Money::new(debit, self.currency),
                credit: Money::new(credit, self.currency),
            });
        }
        draft
    }
}

/// Builder for completed orders
pub struct CompletedOrderBuilder {
    id: OrderId,
    table: String,
    total: Option<Decimal>,
    total_with_tax: Option<Decimal>,
    tax_amount: Option<Decimal>,
    payment_method: PaymentMethod,
}

impl Default for CompletedOrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CompletedOrderBuilder {
    /// Creates a builder for a cash order of 116 gross with 16 tax
    pub fn new() -> Self {
        Self {
            id: OrderId::new(),
            table: "7".to_string(),
            total: None,
            total_with_tax: Some(dec!(116)),
            tax_amount: Some(dec!(16)),
            payment_method: PaymentMethod::Cash,
        }
    }

    /// Sets the order id
    pub fn with_id(mut self, id: OrderId) -> Self {
        self.id = id;
        self
    }

    /// Sets the table label
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Sets the plain total and clears the gross total
    pub fn with_total(mut self, total: Decimal) -> Self {
        self.total = Some(total);
        self.total_with_tax = None;
        self
    }

    /// Sets the gross total
    pub fn with_total_with_tax(mut self, total: Decimal) -> Self {
        self.total_with_tax = Some(total);
        self
    }

    /// Sets the tax amount
    pub fn with_tax_amount(mut self, tax: Decimal) -> Self {
        self.tax_amount = Some(tax);
        self
    }

    /// Clears all amounts
    pub fn without_amounts(mut self) -> Self {
        self.total = None;
        self.total_with_tax = None;
        self.tax_amount = None;
        self
    }

    /// Sets the payment method
    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    /// Builds the order
    pub fn build(self) -> CompletedOrder {
        CompletedOrder {
            id: self.id,
            table: self.table,
            total: self.total,
            total_with_tax: self.total_with_tax,
            tax_amount: self.tax_amount,
            payment_method: self.payment_method,
        }
    }
}

/// Builder for invoices
pub struct InvoiceBuilder {
    kind: InvoiceKind,
    counterparty: String,
    due_date: NaiveDate,
    currency: Currency,
    items: Vec<InvoiceItem>,
    tax: Option<Money>,
}

impl Default for InvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceBuilder {
    /// Creates a builder for a catering invoice with one item
    pub fn new() -> Self {
        Self {
            kind: InvoiceKind::Receivable,
            counterparty: "Acme GmbH".to_string(),
            due_date: DateFixtures::due_date(),
            currency: Currency::EUR,
            items: vec![InvoiceItem::new(
                "Catering buffet",
                Money::new(dec!(400), Currency::EUR),
            )],
            tax: None,
        }
    }

    /// Switches to a vendor bill
    pub fn payable(mut self) -> Self {
        self.kind = InvoiceKind::Payable;
        self.counterparty = "Fresh Produce Co".to_string();
        self
    }

    /// Sets the counterparty name
    pub fn with_counterparty(mut self, name: impl Into<String>) -> Self {
        self.counterparty = name.into();
        self
    }

    /// Sets the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = due_date;
        self
    }

    /// Replaces the items
    pub fn with_items(mut self, items: Vec<InvoiceItem>) -> Self {
        self.items = items;
        self
    }

    /// Sets the tax amount
    pub fn with_tax(mut self, tax: Money) -> Self {
        self.tax = Some(tax);
        self
    }

    /// Builds the invoice
    pub fn build(self) -> Invoice {
        let mut invoice = Invoice::new(self.kind, self.counterparty, self.due_date, self.currency);
        for item in self.items {
            invoice.add_item(item);
        }
        match self.tax {
            Some(tax) => invoice.with_tax(tax),
            None => invoice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_draft_builder_defaults_balance() {
        let draft = EntryDraftBuilder::new().build();

        assert!(draft.is_balanced());
        assert_eq!(draft.lines.len(), 2);
    }

    #[test]
    fn test_entry_draft_builder_custom_lines() {
        let draft = EntryDraftBuilder::new()
            .without_lines()
            .debit("food_cost", dec!(85))
            .credit("bank", dec!(85))
            .build();

        assert!(draft.is_balanced());
        assert_eq!(draft.lines[0].account_id.as_str(), "food_cost");
    }

    #[test]
    fn test_order_builder_defaults() {
        let order = CompletedOrderBuilder::new().build();

        assert_eq!(order.gross(), dec!(116));
        assert_eq!(order.tax(), dec!(16));
    }

    #[test]
    fn test_order_builder_plain_total() {
        let order = CompletedOrderBuilder::new()
            .without_amounts()
            .with_total(dec!(50))
            .build();

        assert_eq!(order.gross(), dec!(50));
        assert_eq!(order.tax(), Decimal::ZERO);
    }

    #[test]
    fn test_invoice_builder() {
        let invoice = InvoiceBuilder::new()
            .with_tax(Money::new(dec!(64), Currency::EUR))
            .build();

        assert_eq!(invoice.subtotal.amount(), dec!(400));
        assert_eq!(invoice.total.amount(), dec!(464));
    }

    #[test]
    fn test_invoice_builder_payable() {
        let bill = InvoiceBuilder::new().payable().build();
        assert_eq!(bill.kind, InvoiceKind::Payable);
        assert!(bill.number.starts_with("BILL-"));
    }
}
