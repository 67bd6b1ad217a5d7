// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Execution dispatcher: one queued action to its remote call(s).

use mq_core::{ActionPayload, ActionType, OfflineAction};

use crate::remote::{RemoteApi, RemoteError};

/// Error type for dispatching a single action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The remote call failed; passed through unchanged.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The action cannot be executed as queued.
    #[error("{0} must be resolved to a direct record id before it is queued")]
    Unsupported(ActionType),
}

/// Execute `action` against `api`.
///
/// Batch updates run their sub-calls one after another and stop at the
/// first failure. Partial progress is not tracked: a retried batch
/// re-applies every update, which is safe because updates set values
/// rather than increment them.
pub async fn execute<A>(api: &A, action: &OfflineAction) -> Result<(), DispatchError>
where
    A: RemoteApi + ?Sized,
{
    match &action.payload {
        ActionPayload::UpdateRecord { record_id, data } => {
            api.update_record(record_id, data).await?;
        }
        ActionPayload::UpdateRecordViaParent { .. } => {
            return Err(DispatchError::Unsupported(ActionType::UpdateRecordViaParent));
        }
        ActionPayload::BatchUpdateRecords { record_ids, data } => {
            for record_id in record_ids {
                api.update_record(record_id, data).await?;
            }
        }
        ActionPayload::ApplyForExchange { exchange_id } => {
            api.take_over_exchange(exchange_id).await?;
        }
        ActionPayload::WithdrawFromExchange { exchange_id } => {
            api.withdraw_from_exchange(exchange_id).await?;
        }
        ActionPayload::AddToExchange { source_id } => {
            api.publish_to_exchange(source_id).await?;
        }
    }
    Ok(())
}
