use comedica_api::types::{GroupInput, Role, RoleAssignment, SecurityGroup};
use comedica_api::CookieSource;

use super::{messages, Backoffice};
use crate::action::{from_error, normalize, normalize_with, ActionResult};
use crate::error::BackofficeError;
use crate::validation::{sanitize_text, MAX_SEARCH_LENGTH};

fn prepare_group(input: &GroupInput) -> Result<GroupInput, BackofficeError> {
    Ok(GroupInput {
        nombre: sanitize_text(&input.nombre, MAX_SEARCH_LENGTH)?,
        descripcion: input.descripcion.clone(),
    })
}

impl Backoffice {
    pub async fn list_groups(&self, cookies: &dyn CookieSource) -> ActionResult<Vec<SecurityGroup>> {
        normalize(
            "list_groups",
            messages::LIST_GROUPS,
            self.client.list_groups(cookies).await,
        )
    }

    pub async fn create_group(
        &self,
        cookies: &dyn CookieSource,
        input: &GroupInput,
    ) -> ActionResult<SecurityGroup> {
        const LABEL: &str = "create_group";
        let input = match prepare_group(input) {
            Ok(i) => i,
            Err(e) => return from_error(LABEL, messages::CREATE_GROUP, e),
        };
        normalize(
            LABEL,
            messages::CREATE_GROUP,
            self.client.create_group(cookies, &input).await,
        )
    }

    pub async fn update_group(
        &self,
        cookies: &dyn CookieSource,
        id: i64,
        input: &GroupInput,
    ) -> ActionResult<SecurityGroup> {
        const LABEL: &str = "update_group";
        let input = match prepare_group(input) {
            Ok(i) => i,
            Err(e) => return from_error(LABEL, messages::UPDATE_GROUP, e),
        };
        normalize(
            LABEL,
            messages::UPDATE_GROUP,
            self.client.update_group(cookies, id, &input).await,
        )
    }

    pub async fn delete_group(&self, cookies: &dyn CookieSource, id: i64) -> ActionResult<bool> {
        normalize_with(
            "delete_group",
            messages::DELETE_GROUP,
            self.client.delete_group(cookies, id).await,
            |_, _| true,
        )
    }

    pub async fn list_roles(&self, cookies: &dyn CookieSource) -> ActionResult<Vec<Role>> {
        normalize(
            "list_roles",
            messages::LIST_ROLES,
            self.client.list_roles(cookies).await,
        )
    }

    /// Replaces the roles granted to a group. Duplicate ids are sent once.
    pub async fn assign_group_roles(
        &self,
        cookies: &dyn CookieSource,
        group_id: i64,
        role_ids: &[i64],
    ) -> ActionResult<bool> {
        let mut roles = role_ids.to_vec();
        roles.sort_unstable();
        roles.dedup();
        normalize_with(
            "assign_group_roles",
            messages::ASSIGN_GROUP_ROLES,
            self.client
                .assign_group_roles(cookies, group_id, &RoleAssignment { roles })
                .await,
            |_, _| true,
        )
    }
}
