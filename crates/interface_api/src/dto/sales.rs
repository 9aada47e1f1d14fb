//! Sales posting DTOs

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use core_kernel::OrderId;
use domain_ledger::{CompletedOrder, PaymentMethod};

/// A completed order reported by the order workflow
#[derive(Debug, Deserialize, Validate)]
pub struct PostSaleRequest {
    /// Order id; generated when the workflow does not supply one
    #[serde(default)]
    pub id: Option<OrderId>,
    /// Table label
    #[validate(length(min = 1, message = "table is required"))]
    pub table: String,
    /// Order total; treated as gross when no tax total is present
    #[serde(default)]
    pub total: Option<Decimal>,
    /// Gross total including tax
    #[serde(default)]
    pub total_with_tax: Option<Decimal>,
    /// Tax portion of the gross
    #[serde(default)]
    pub tax_amount: Option<Decimal>,
    /// Settlement method
    pub payment_method: PaymentMethod,
}

impl From<PostSaleRequest> for CompletedOrder {
    fn from(request: PostSaleRequest) -> Self {
        CompletedOrder {
            id: request.id.unwrap_or_default(),
            table: request.table,
            total: request.total,
            total_with_tax: request.total_with_tax,
            tax_amount: request.tax_amount,
            payment_method: request.payment_method,
        }
    }
}
