//! Invoicing for the back office
//!
//! Customer invoices (catering, tabs for corporate guests) and vendor
//! bills share one document type distinguished by [`InvoiceKind`]. The
//! bookkeeping side lives in [`InvoicePostings`]: every lifecycle event
//! maps to a balanced entry draft against the receivable/payable roles,
//! posted through the journal service like any other entry.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use core_kernel::{AccountId, Currency, InvoiceId, Money, TaxRate};

use crate::entry::{EntryDraft, EntryRef};
use crate::roles::{AccountRole, AccountRoleMap};
use crate::sales::PaymentMethod;

/// Direction of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceKind {
    /// Money owed to the restaurant (customer invoice)
    Receivable,
    /// Money the restaurant owes (vendor bill)
    Payable,
}

/// Invoice status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Being drafted
    Draft,
    /// Issued, awaiting payment
    Issued,
    /// Partial payment received
    PartiallyPaid,
    /// Fully paid
    Paid,
    /// Cancelled before payment
    Cancelled,
}

/// A line item on an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// Item ID
    pub id: Uuid,
    /// Description
    pub description: String,
    /// Quantity
    pub quantity: Decimal,
    /// Unit price
    pub unit_price: Money,
    /// Discount (if any)
    pub discount: Option<Money>,
}

impl InvoiceItem {
    /// Creates a new item with quantity one
    pub fn new(description: impl Into<String>, unit_price: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            quantity: Decimal::ONE,
            unit_price,
            discount: None,
        }
    }

    /// Sets the quantity
    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = quantity;
        self
    }

    /// Applies a discount
    pub fn with_discount(mut self, discount: Money) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Calculates the total for this item
    pub fn total(&self) -> Money {
        let gross = self.unit_price * self.quantity;
        match &self.discount {
            Some(d) => gross - *d,
            None => gross,
        }
    }
}

/// A customer invoice or vendor bill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier
    pub id: InvoiceId,
    /// Human-readable number ("INV-…" or "BILL-…")
    pub number: String,
    /// Direction
    pub kind: InvoiceKind,
    /// Counterparty name (customer or vendor)
    pub counterparty: String,
    /// Issue date
    pub issue_date: NaiveDate,
    /// Due date
    pub due_date: NaiveDate,
    /// Currency
    pub currency: Currency,
    /// Line items
    pub items: Vec<InvoiceItem>,
    /// Sum of item totals
    pub subtotal: Money,
    /// Tax amount
    pub tax: Option<Money>,
    /// Subtotal plus tax
    pub total: Money,
    /// Amount paid so far
    pub amount_paid: Money,
    /// Status
    pub status: InvoiceStatus,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Creates a new draft invoice
    pub fn new(
        kind: InvoiceKind,
        counterparty: impl Into<String>,
        due_date: NaiveDate,
        currency: Currency,
    ) -> Self {
        let now = Utc::now();
        let id = InvoiceId::new_v7();

        Self {
            id,
            number: generate_number(kind, &id),
            kind,
            counterparty: counterparty.into(),
            issue_date: now.date_naive(),
            due_date,
            currency,
            items: Vec::new(),
            subtotal: Money::zero(currency),
            tax: None,
            total: Money::zero(currency),
            amount_paid: Money::zero(currency),
            status: InvoiceStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    /// Adds an item and recomputes totals
    pub fn add_item(&mut self, item: InvoiceItem) {
        self.items.push(item);
        self.recalculate_totals();
    }

    /// Sets the tax amount
    pub fn with_tax(mut self, tax: Money) -> Self {
        self.tax = Some(tax);
        self.recalculate_totals();
        self
    }

    /// Computes the tax from a VAT rate applied to the subtotal
    pub fn with_tax_rate(self, rate: TaxRate) -> Self {
        let tax = rate.apply_to_net(&self.subtotal);
        self.with_tax(tax)
    }

    /// Issues the invoice
    pub fn issue(&mut self) {
        self.status = InvoiceStatus::Issued;
        self.updated_at = Utc::now();
    }

    /// Cancels the invoice
    pub fn cancel(&mut self) {
        self.status = InvoiceStatus::Cancelled;
        self.updated_at = Utc::now();
    }

    /// Records a payment against the invoice
    pub fn record_payment(&mut self, amount: Money) {
        self.amount_paid = self.amount_paid + amount;
        self.updated_at = Utc::now();

        if self.amount_paid.amount() >= self.total.amount() {
            self.status = InvoiceStatus::Paid;
        } else if self.amount_paid.is_positive() {
            self.status = InvoiceStatus::PartiallyPaid;
        }
    }

    /// Checks whether the invoice is past due and still open
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        today > self.due_date
            && !matches!(self.status, InvoiceStatus::Paid | InvoiceStatus::Cancelled)
    }

    /// Returns the balance due
    pub fn balance_due(&self) -> Money {
        self.total - self.amount_paid
    }

    fn recalculate_totals(&mut self) {
        self.subtotal = self
            .items
            .iter()
            .fold(Money::zero(self.currency), |acc, item| acc + item.total());

        self.total = match &self.tax {
            Some(tax) => self.subtotal + *tax,
            None => self.subtotal,
        };
    }
}

fn generate_number(kind: InvoiceKind, id: &InvoiceId) -> String {
    let prefix = match kind {
        InvoiceKind::Receivable => "INV",
        InvoiceKind::Payable => "BILL",
    };
    let uuid = id.as_uuid().simple().to_string();
    format!("{}-{}", prefix, &uuid[..8])
}

/// Builders for the journal entries an invoice lifecycle produces
///
/// Every draft is balanced by construction; posting still goes through the
/// journal service so the balance invariant is enforced in one place.
pub struct InvoicePostings;

impl InvoicePostings {
    /// Issuing a customer invoice: debit receivable, credit sales (and VAT)
    pub fn issue_receivable(invoice: &Invoice, roles: &AccountRoleMap) -> EntryDraft {
        let tax = invoice
            .tax
            .unwrap_or_else(|| Money::zero(invoice.currency));
        let net = invoice.total - tax;

        let mut draft = EntryDraft::new(
            invoice.issue_date,
            format!("Invoice {} — {}", invoice.number, invoice.counterparty),
        )
        .debit(roles.resolve(AccountRole::Receivable), invoice.total)
        .credit(roles.resolve(AccountRole::Sales), net);

        if tax.is_positive() {
            draft = draft.credit(roles.resolve(AccountRole::VatOutput), tax);
        }

        draft.with_reference(EntryRef::invoice(invoice.id, invoice.number.clone()))
    }

    /// A payment received on a customer invoice
    pub fn receivable_payment(
        invoice: &Invoice,
        amount: Money,
        method: PaymentMethod,
        date: NaiveDate,
        roles: &AccountRoleMap,
    ) -> EntryDraft {
        EntryDraft::new(
            date,
            format!("Payment on {} — {}", invoice.number, invoice.counterparty),
        )
        .debit(roles.resolve(method.settles_to()), amount)
        .credit(roles.resolve(AccountRole::Receivable), amount)
        .with_reference(EntryRef::invoice(invoice.id, invoice.number.clone()))
    }

    /// Recording a vendor bill: debit the expense, credit payable
    pub fn record_payable(
        invoice: &Invoice,
        expense_account: impl Into<AccountId>,
        roles: &AccountRoleMap,
    ) -> EntryDraft {
        EntryDraft::new(
            invoice.issue_date,
            format!("Bill {} — {}", invoice.number, invoice.counterparty),
        )
        .debit(expense_account, invoice.total)
        .credit(roles.resolve(AccountRole::Payable), invoice.total)
        .with_reference(EntryRef::invoice(invoice.id, invoice.number.clone()))
    }

    /// Paying a vendor bill: debit payable, credit cash or bank
    pub fn payable_payment(
        invoice: &Invoice,
        amount: Money,
        method: PaymentMethod,
        date: NaiveDate,
        roles: &AccountRoleMap,
    ) -> EntryDraft {
        EntryDraft::new(
            date,
            format!("Payment of {} — {}", invoice.number, invoice.counterparty),
        )
        .debit(roles.resolve(AccountRole::Payable), amount)
        .credit(roles.resolve(method.settles_to()), amount)
        .with_reference(EntryRef::invoice(invoice.id, invoice.number.clone()))
    }
}
