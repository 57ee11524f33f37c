use comedica_api::types::{User, UserInput};
use comedica_api::{CookieSource, Query, UserFilter};

use super::{check_common, messages, sanitize_search, Backoffice};
use crate::action::{from_error, normalize, normalize_with, ActionResult};
use crate::error::BackofficeError;
use crate::paging::Paged;
use crate::validation::{sanitize_text, validate_email, MAX_SEARCH_LENGTH};

fn prepare_filter(filter: Option<&UserFilter>) -> Result<UserFilter, BackofficeError> {
    let mut filter = filter.cloned().unwrap_or_default();
    check_common(filter.common())?;
    sanitize_search(&mut filter.usuario)?;
    sanitize_search(&mut filter.nombre)?;
    Ok(filter)
}

fn prepare_input(input: &UserInput) -> Result<UserInput, BackofficeError> {
    Ok(UserInput {
        usuario: sanitize_text(&input.usuario, MAX_SEARCH_LENGTH)?,
        nombre: sanitize_text(&input.nombre, MAX_SEARCH_LENGTH)?,
        correo: validate_email(&input.correo)?,
        grupo_id: input.grupo_id,
        activo: input.activo,
    })
}

impl Backoffice {
    pub async fn list_users(
        &self,
        cookies: &dyn CookieSource,
        filter: Option<&UserFilter>,
    ) -> ActionResult<Paged<User>> {
        const LABEL: &str = "list_users";
        let filter = match prepare_filter(filter) {
            Ok(f) => f,
            Err(e) => return from_error(LABEL, messages::LIST_USERS, e),
        };
        normalize_with(
            LABEL,
            messages::LIST_USERS,
            self.client.list_users(cookies, &filter).await,
            |items, blocks| Paged::from_blocks(items, &blocks),
        )
    }

    pub async fn create_user(&self, cookies: &dyn CookieSource, input: &UserInput) -> ActionResult<User> {
        const LABEL: &str = "create_user";
        let input = match prepare_input(input) {
            Ok(i) => i,
            Err(e) => return from_error(LABEL, messages::CREATE_USER, e),
        };
        normalize(
            LABEL,
            messages::CREATE_USER,
            self.client.create_user(cookies, &input).await,
        )
    }

    pub async fn update_user(
        &self,
        cookies: &dyn CookieSource,
        id: i64,
        input: &UserInput,
    ) -> ActionResult<User> {
        const LABEL: &str = "update_user";
        let input = match prepare_input(input) {
            Ok(i) => i,
            Err(e) => return from_error(LABEL, messages::UPDATE_USER, e),
        };
        normalize(
            LABEL,
            messages::UPDATE_USER,
            self.client.update_user(cookies, id, &input).await,
        )
    }

    pub async fn delete_user(&self, cookies: &dyn CookieSource, id: i64) -> ActionResult<bool> {
        normalize_with(
            "delete_user",
            messages::DELETE_USER,
            self.client.delete_user(cookies, id).await,
            |_, _| true,
        )
    }

    /// Asks the backend to issue a new temporary password for the user.
    pub async fn reset_user_password(&self, cookies: &dyn CookieSource, id: i64) -> ActionResult<bool> {
        normalize_with(
            "reset_user_password",
            messages::RESET_USER_PASSWORD,
            self.client.reset_user_password(cookies, id).await,
            |_, _| true,
        )
    }
}
