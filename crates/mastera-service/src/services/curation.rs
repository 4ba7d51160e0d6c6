//! Curation service
//!
//! Admin-only homepage quick-pick management.

use mastera_core::{DomainError, WorkId};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{UpdateQuickPickRequest, WorkResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Curation service
pub struct CurationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CurationService<'a> {
    /// Create a new CurationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Set or clear a work's quick-pick flag and order.
    ///
    /// Clearing the flag also clears the order; an order without the flag is
    /// rejected.
    #[instrument(skip(self, request))]
    pub async fn set_quick_pick(
        &self,
        actor_role: Option<&str>,
        work_id: WorkId,
        request: UpdateQuickPickRequest,
    ) -> ServiceResult<WorkResponse> {
        self.require_admin(actor_role)?;
        request.validate()?;

        let mut work = self
            .ctx
            .work_repo()
            .find_by_id(work_id)
            .await?
            .ok_or(DomainError::WorkNotFound(work_id))?;

        work.set_quick_pick(request.quick_pick, request.quick_pick_order)?;

        let updated = self
            .ctx
            .work_repo()
            .update_quick_pick(work_id, work.quick_pick, work.quick_pick_order)
            .await?;

        info!(
            work_id = %work_id,
            quick_pick = updated.quick_pick,
            quick_pick_order = ?updated.quick_pick_order,
            "Quick pick updated"
        );

        Ok(updated.into())
    }

    fn require_admin(&self, actor_role: Option<&str>) -> ServiceResult<()> {
        let admin_role = self.ctx.admin_role();
        if actor_role == Some(admin_role) {
            return Ok(());
        }

        warn!(role = ?actor_role, "Curation denied");
        Err(ServiceError::permission_denied(admin_role))
    }
}
