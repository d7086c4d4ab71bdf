//! Transaction submission
//!
//! validate draft → compose record → POST → reset draft on success.
//! Any failure leaves the draft as it was, so the user can correct and
//! retry. Local validation failures never reach the network.

use crate::api::transaction_path;
use crate::{ClientResult, HttpClient};
use rust_decimal::Decimal;
use shared::TransactionKind;
use shared::billing::TransactionDraft;
use shared::error::AppResult;
use shared::models::{
    BillCreate, BillHeader, PurchaseCreate, PurchaseHeader, SaleCreate, SaleHeader,
    TransactionRecord,
};
use shared::response::MutationResponse;

/// Header of any transaction kind
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionHeader {
    Sale(SaleHeader),
    Purchase(PurchaseHeader),
    Bill(BillHeader),
}

impl TransactionHeader {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Sale(_) => TransactionKind::Sale,
            Self::Purchase(_) => TransactionKind::Purchase,
            Self::Bill(_) => TransactionKind::Bill,
        }
    }
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub kind: TransactionKind,
    /// Invoice, purchase or bill number as sent
    pub reference: String,
    pub final_amount: Decimal,
    pub outstanding: Decimal,
    pub response: MutationResponse,
}

impl SubmitOutcome {
    /// Server message, or a default confirmation
    pub fn message(&self) -> String {
        match self.response.message() {
            Some(m) if !m.trim().is_empty() => m.to_string(),
            _ => match self.kind {
                TransactionKind::Sale => "Sale saved successfully.".to_string(),
                TransactionKind::Purchase => "Purchase saved.".to_string(),
                TransactionKind::Bill => "Bill saved.".to_string(),
            },
        }
    }
}

/// Submits drafts through an [`HttpClient`]
#[derive(Debug, Clone)]
pub struct TransactionService<C> {
    client: C,
}

impl<C: HttpClient> TransactionService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn into_inner(self) -> C {
        self.client
    }

    /// Submit `draft` under `header`, dispatching on the header's kind.
    pub async fn submit(
        &self,
        header: &TransactionHeader,
        draft: &mut TransactionDraft,
    ) -> ClientResult<SubmitOutcome> {
        match header {
            TransactionHeader::Sale(h) => self.submit_sale(h, draft).await,
            TransactionHeader::Purchase(h) => self.submit_purchase(h, draft).await,
            TransactionHeader::Bill(h) => self.submit_bill(h, draft).await,
        }
    }

    pub async fn submit_sale(
        &self,
        header: &SaleHeader,
        draft: &mut TransactionDraft,
    ) -> ClientResult<SubmitOutcome> {
        self.submit_record(draft, |d| SaleCreate::from_draft(header, d))
            .await
    }

    pub async fn submit_purchase(
        &self,
        header: &PurchaseHeader,
        draft: &mut TransactionDraft,
    ) -> ClientResult<SubmitOutcome> {
        self.submit_record(draft, |d| PurchaseCreate::from_draft(header, d))
            .await
    }

    pub async fn submit_bill(
        &self,
        header: &BillHeader,
        draft: &mut TransactionDraft,
    ) -> ClientResult<SubmitOutcome> {
        self.submit_record(draft, |d| BillCreate::from_draft(header, d))
            .await
    }

    async fn submit_record<R, F>(
        &self,
        draft: &mut TransactionDraft,
        compose: F,
    ) -> ClientResult<SubmitOutcome>
    where
        R: TransactionRecord + 'static,
        F: FnOnce(&TransactionDraft) -> AppResult<R>,
    {
        let record = match compose(&*draft) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!(kind = %draft.kind(), error = %e, "Draft rejected before submit");
                return Err(e.into());
            }
        };

        if record.final_amount() < Decimal::ZERO {
            tracing::warn!(
                kind = %R::KIND,
                reference = record.reference(),
                final_amount = %record.final_amount(),
                "Discount exceeds subtotal plus GST; submitting negative final amount"
            );
        }

        tracing::info!(
            kind = %R::KIND,
            reference = record.reference(),
            final_amount = %record.final_amount(),
            outstanding = %record.outstanding(),
            "Submitting transaction"
        );

        let result: ClientResult<MutationResponse> =
            self.client.post(transaction_path(R::KIND), &record).await;
        match result {
            Ok(response) => {
                draft.reset();
                tracing::info!(kind = %R::KIND, reference = record.reference(), "Transaction saved");
                Ok(SubmitOutcome {
                    kind: R::KIND,
                    reference: record.reference().to_string(),
                    final_amount: record.final_amount(),
                    outstanding: record.outstanding(),
                    response,
                })
            }
            Err(e) => {
                tracing::error!(
                    kind = %R::KIND,
                    reference = record.reference(),
                    error = %e,
                    "Transaction not saved; draft kept"
                );
                Err(e)
            }
        }
    }
}
