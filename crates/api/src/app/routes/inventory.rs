use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Extension, Form, Path},
    response::{Html, Redirect},
    routing::get,
    Router,
};

use invtrack_core::{DomainError, ItemId};

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", get(add_form).post(add_item))
        .route("/edit/:id", get(edit_form).post(edit_item))
        .route("/delete/:id", get(delete_item))
}

pub async fn index(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Html<String>, ApiError> {
    let items = services.inventory().list()?;
    Ok(services.views().index(&items)?)
}

pub async fn add_form(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Html<String>, ApiError> {
    Ok(services.views().add_form()?)
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Form(form): Form<dto::ItemForm>,
) -> Result<Redirect, ApiError> {
    services
        .inventory()
        .add(&form.name, &form.quantity, &form.price)?;
    Ok(Redirect::to("/"))
}

pub async fn edit_form(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let id = existing_id(&id)?;
    let item = services.inventory().get(id)?;
    Ok(services.views().edit_form(&item)?)
}

pub async fn edit_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    form: Result<Form<dto::ItemForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let id = existing_id(&id)?;
    // The item must exist before the body is looked at.
    services.inventory().get(id)?;
    let Form(form) = form?;

    services
        .inventory()
        .edit(id, &form.name, &form.quantity, &form.price)?;
    Ok(Redirect::to("/"))
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Redirect, ApiError> {
    match ItemId::parse_segment(&id)? {
        Some(id) => {
            services.inventory().delete(id)?;
        }
        None => tracing::debug!(segment = %id, "delete of unassignable id ignored"),
    }
    Ok(Redirect::to("/"))
}

/// Route segment that must name an item; `0` and overflow are not found.
fn existing_id(segment: &str) -> Result<ItemId, ApiError> {
    Ok(ItemId::parse_segment(segment)?.ok_or_else(DomainError::not_found)?)
}
