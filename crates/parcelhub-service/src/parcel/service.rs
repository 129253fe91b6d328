//! Parcel lifecycle service.

use std::sync::Arc;

use tracing::{info, warn};

use parcelhub_auth::policy::{AccessPolicy, ParcelOperation};
use parcelhub_core::config::ParcelsConfig;
use parcelhub_core::error::{AppError, ErrorKind};
use parcelhub_core::result::AppResult;
use parcelhub_database::EntityStore;
use parcelhub_entity::parcel::{NewParcel, generate_parcel_no};
use parcelhub_entity::party::{Receiver, Sender};

use super::input::{CreateParcelInput, UpdateParcelInput, ValidatedCreate};
use super::view::{CreatedParcel, ParcelDetailView, UpdatedParcelView};
use super::{require_caller, store_failure};
use crate::context::RequestContext;

/// Fresh numbers tried before a create gives up on parcel number collisions.
const PARCEL_NO_ATTEMPTS: usize = 3;

/// Creates, reads, updates and deletes parcels.
///
/// Create and detail address parcels by numeric id; update and delete by
/// `parcel_no`.
#[derive(Debug, Clone)]
pub struct ParcelService {
    store: Arc<dyn EntityStore>,
    policy: Arc<AccessPolicy>,
    enforce_references: bool,
}

impl ParcelService {
    pub fn new(
        store: Arc<dyn EntityStore>,
        policy: Arc<AccessPolicy>,
        config: &ParcelsConfig,
    ) -> Self {
        Self {
            store,
            policy,
            enforce_references: config.enforce_references,
        }
    }

    /// Record a parcel handed in by a sender, with the caller as teller.
    pub async fn create(
        &self,
        caller: Option<&RequestContext>,
        input: CreateParcelInput,
    ) -> AppResult<CreatedParcel> {
        let ctx = require_caller(&self.policy, ParcelOperation::Create, caller)?;
        let data = input.validate()?;

        let (sender, receiver) = if self.enforce_references {
            self.resolve_references(ctx, &data).await?
        } else {
            (None, None)
        };

        let mut attempt = 0;
        let parcel = loop {
            attempt += 1;
            let new_parcel = build_new_parcel(ctx.user_id, &data, sender.as_ref(), receiver.as_ref());
            match self.store.insert_parcel(new_parcel).await {
                Err(e) if e.is(ErrorKind::Conflict) && attempt < PARCEL_NO_ATTEMPTS => {
                    warn!(attempt, "Parcel number collision, retrying");
                }
                other => break other.map_err(store_failure("Could not add parcel. Please try again"))?,
            }
        };

        info!(
            teller_id = ctx.user_id,
            parcel_id = parcel.id,
            parcel_no = %parcel.parcel_no,
            "Parcel created"
        );

        Ok(CreatedParcel {
            id: parcel.id,
            parcel_no: parcel.parcel_no,
        })
    }

    /// Load a parcel with its sender, receiver and teller.
    pub async fn get_detail(
        &self,
        caller: Option<&RequestContext>,
        parcel_id: i64,
    ) -> AppResult<ParcelDetailView> {
        self.policy
            .check(ParcelOperation::Detail, caller.is_some())?;

        let parcel = self
            .store
            .find_parcel(parcel_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Could not find parcel with id {parcel_id}")))?;

        let sender = self.store.find_sender(parcel.sender_id).await?.ok_or_else(|| {
            AppError::not_found(format!(
                "Sender {} of parcel {parcel_id} not found",
                parcel.sender_id
            ))
        })?;
        let receiver = self
            .store
            .find_receiver(parcel.receiver_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Receiver {} of parcel {parcel_id} not found",
                    parcel.receiver_id
                ))
            })?;
        let teller = self.store.find_user(parcel.teller_id).await?.ok_or_else(|| {
            AppError::not_found(format!(
                "Teller {} of parcel {parcel_id} not found",
                parcel.teller_id
            ))
        })?;

        Ok(ParcelDetailView::assemble(parcel, sender, receiver, teller))
    }

    /// Patch a parcel's contact snapshot or quantity. The caller becomes its
    /// teller.
    pub async fn update(
        &self,
        caller: Option<&RequestContext>,
        parcel_no: &str,
        input: UpdateParcelInput,
    ) -> AppResult<UpdatedParcelView> {
        let ctx = require_caller(&self.policy, ParcelOperation::Update, caller)?;
        let changes = input.into_changes(ctx.user_id)?;

        let editor = self
            .store
            .find_user(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Caller is not a registered user"))?;

        let parcel = self
            .store
            .update_parcel_by_no(parcel_no, changes)
            .await
            .map_err(store_failure("Could not update the parcel. Please try again"))?
            .ok_or_else(|| AppError::not_found(format!("Could not find parcel {parcel_no}")))?;

        info!(teller_id = ctx.user_id, parcel_no = %parcel.parcel_no, "Parcel updated");

        Ok(UpdatedParcelView::new(parcel, &editor))
    }

    /// Permanently remove a parcel.
    pub async fn delete(&self, caller: Option<&RequestContext>, parcel_no: &str) -> AppResult<()> {
        let ctx = require_caller(&self.policy, ParcelOperation::Delete, caller)?;

        let deleted = self
            .store
            .delete_parcel_by_no(parcel_no)
            .await
            .map_err(store_failure("Could not delete the parcel. Please try again"))?;
        if !deleted {
            return Err(AppError::not_found(format!("Could not find parcel {parcel_no}")));
        }

        info!(teller_id = ctx.user_id, parcel_no = %parcel_no, "Parcel deleted");
        Ok(())
    }

    async fn resolve_references(
        &self,
        ctx: &RequestContext,
        data: &ValidatedCreate,
    ) -> AppResult<(Option<Sender>, Option<Receiver>)> {
        if self.store.find_user(ctx.user_id).await?.is_none() {
            return Err(AppError::unauthorized("Caller is not a registered user"));
        }
        let sender = self
            .store
            .find_sender(data.sender_id)
            .await?
            .ok_or_else(|| AppError::validation(format!("Sender {} does not exist", data.sender_id)))?;
        let receiver = self
            .store
            .find_receiver(data.receiver_id)
            .await?
            .ok_or_else(|| {
                AppError::validation(format!("Receiver {} does not exist", data.receiver_id))
            })?;
        Ok((Some(sender), Some(receiver)))
    }
}

fn build_new_parcel(
    teller_id: i64,
    data: &ValidatedCreate,
    sender: Option<&Sender>,
    receiver: Option<&Receiver>,
) -> NewParcel {
    NewParcel {
        parcel_no: generate_parcel_no(),
        item: data.item.clone(),
        sender_id: data.sender_id,
        teller_id,
        receiver_id: data.receiver_id,
        dispatch_date: data.dispatch_date,
        arrival_date: data.arrival_date,
        cost: data.cost,
        quantity: data.quantity,
        sender_name: sender.map(|s| s.full_name.clone()),
        sender_phone: sender.and_then(|s| s.phone.clone()),
        sender_address: sender.and_then(|s| s.center.clone()),
        receiver_name: receiver.map(|r| r.full_name.clone()),
        receiver_phone: receiver.and_then(|r| r.phone.clone()),
    }
}
