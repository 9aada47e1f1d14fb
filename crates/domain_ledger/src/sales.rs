//! Sales posting rule
//!
//! Derives a balanced journal entry from a completed table order. The
//! order workflow itself lives outside this crate; it hands a
//! [`CompletedOrder`] over exactly once per order and receives the posted
//! entry back.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money, OrderId};

use crate::entry::{EntryDraft, EntryRef};
use crate::roles::{AccountRole, AccountRoleMap};

/// How the guest settled the bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Paid into the cash drawer
    Cash,
    /// Card terminal settlement
    Card,
    /// Direct bank transfer
    Iban,
}

impl PaymentMethod {
    /// The account role the payment settles into
    pub fn settles_to(&self) -> AccountRole {
        match self {
            PaymentMethod::Cash => AccountRole::Cash,
            PaymentMethod::Card | PaymentMethod::Iban => AccountRole::Bank,
        }
    }
}

/// A completed order as reported by the order workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedOrder {
    /// Order identifier
    pub id: OrderId,
    /// Table label
    pub table: String,
    /// Order total; gross when no separate tax total is present
    #[serde(default)]
    pub total: Option<Decimal>,
    /// Gross total including tax, preferred over `total` when present
    #[serde(default)]
    pub total_with_tax: Option<Decimal>,
    /// Tax portion of the gross total
    #[serde(default)]
    pub tax_amount: Option<Decimal>,
    /// How the guest paid
    pub payment_method: PaymentMethod,
}

impl CompletedOrder {
    /// The gross amount actually collected
    pub fn gross(&self) -> Decimal {
        self.total_with_tax
            .or(self.total)
            .unwrap_or(Decimal::ZERO)
    }

    /// The tax portion, zero when not reported
    pub fn tax(&self) -> Decimal {
        self.tax_amount.unwrap_or(Decimal::ZERO)
    }
}

/// Builds the journal entry draft for a completed order
///
/// Net revenue is always derived by subtraction (`gross - tax`), never
/// summed independently, so the resulting lines balance by construction:
/// one debit of the full gross against the settlement account, a sales
/// credit of the net, and a VAT credit only when tax was collected.
pub fn sales_entry_draft(
    order: &CompletedOrder,
    roles: &AccountRoleMap,
    currency: Currency,
    date: NaiveDate,
) -> EntryDraft {
    let gross = Money::new(order.gross(), currency);
    let tax = Money::new(order.tax(), currency);
    let net_sales = gross - tax;

    let settlement = roles.resolve(order.payment_method.settles_to());

    let mut draft = EntryDraft::new(date, format!("Sales — table {}", order.table))
        .debit(settlement, gross)
        .credit(roles.resolve(AccountRole::Sales), net_sales);

    if tax.is_positive() {
        draft = draft.credit(roles.resolve(AccountRole::VatOutput), tax);
    }

    draft.with_reference(EntryRef::order(order.id, format!("Table {}", order.table)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn order(method: PaymentMethod) -> CompletedOrder {
        CompletedOrder {
            id: OrderId::new(),
            table: "7".to_string(),
            total: None,
            total_with_tax: Some(dec!(116)),
            tax_amount: Some(dec!(16)),
            payment_method: method,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()
    }

    #[test]
    fn test_gross_prefers_total_with_tax() {
        let mut o = order(PaymentMethod::Cash);
        o.total = Some(dec!(100));
        assert_eq!(o.gross(), dec!(116));

        o.total_with_tax = None;
        assert_eq!(o.gross(), dec!(100));

        o.total = None;
        assert_eq!(o.gross(), Decimal::ZERO);
    }

    #[test]
    fn test_cash_order_debits_cash_role() {
        let draft = sales_entry_draft(
            &order(PaymentMethod::Cash),
            &AccountRoleMap::new(),
            Currency::EUR,
            date(),
        );

        assert_eq!(draft.lines.len(), 3);
        assert_eq!(draft.lines[0].account_id.as_str(), "cash");
        assert_eq!(draft.lines[0].debit.amount(), dec!(116));
        assert_eq!(draft.lines[1].account_id.as_str(), "sales");
        assert_eq!(draft.lines[1].credit.amount(), dec!(100));
        assert_eq!(draft.lines[2].account_id.as_str(), "vat_output");
        assert_eq!(draft.lines[2].credit.amount(), dec!(16));
        assert!(draft.is_balanced());
    }

    #[test]
    fn test_card_and_iban_orders_debit_bank_role() {
        for method in [PaymentMethod::Card, PaymentMethod::Iban] {
            let draft = sales_entry_draft(
                &order(method),
                &AccountRoleMap::new(),
                Currency::EUR,
                date(),
            );
            assert_eq!(draft.lines[0].account_id.as_str(), "bank");
        }
    }

    #[test]
    fn test_zero_tax_omits_vat_line() {
        let o = CompletedOrder {
            id: OrderId::new(),
            table: "2".to_string(),
            total: Some(dec!(50)),
            total_with_tax: None,
            tax_amount: None,
            payment_method: PaymentMethod::Card,
        };

        let draft = sales_entry_draft(&o, &AccountRoleMap::new(), Currency::EUR, date());

        assert_eq!(draft.lines.len(), 2);
        assert_eq!(draft.lines[0].debit.amount(), dec!(50));
        assert_eq!(draft.lines[1].credit.amount(), dec!(50));
        assert!(draft.is_balanced());
    }

    #[test]
    fn test_memo_and_reference_identify_the_table() {
        let o = order(PaymentMethod::Cash);
        let draft = sales_entry_draft(&o, &AccountRoleMap::new(), Currency::EUR, date());

        assert_eq!(draft.memo, "Sales — table 7");
        assert_eq!(draft.reference.kind, crate::entry::EntryRefKind::Order);
        assert_eq!(draft.reference.id, o.id.to_string());
        assert_eq!(draft.reference.label, "Table 7");
    }
}
