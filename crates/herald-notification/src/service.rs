//! Notification listing service: gate check, adapter query, envelope.

use herald_types::gate::AuthCtx;
use herald_types::meta_adapter::{ListNotificationOptions, Notification, NotifiableRef};
use herald_types::types::Page;

use crate::prelude::*;

/// Clamp for caller-supplied page sizes.
const MAX_PER_PAGE: u32 = 100;

#[derive(Clone, Copy, Debug)]
pub struct PageRequest {
	pub page: u32,
	pub per_page: Option<u32>,
}

fn options(app: &App, notifiable: Option<NotifiableRef>, req: PageRequest) -> ListNotificationOptions {
	ListNotificationOptions {
		notifiable,
		page: req.page.max(1),
		per_page: req.per_page.unwrap_or(app.opts.per_page).clamp(1, MAX_PER_PAGE),
	}
}

/// Lists every stored notification, newest first. Requires the host's
/// `viewAny` gate action; a denial surfaces as 403.
pub async fn list_all(
	app: &App,
	auth: &AuthCtx,
	req: PageRequest,
	path: &str,
) -> HrResult<Page<Notification>> {
	if !app.gate.allows(auth, "viewAny", None).await {
		warn!("User {} may not list all notifications", auth.user_id);
		return Err(Error::PermissionDenied);
	}

	let opts = options(app, None, req);
	let items = app.meta_adapter.list_notifications(&opts).await?;

	Ok(Page::simple(items, opts.page(), opts.per_page, path))
}

/// Lists the notifications of one notifiable, newest first. The
/// notifiable must resolve (404 otherwise) and the host's
/// `viewNotificationsOf` gate action must allow the caller.
pub async fn list_for_notifiable(
	app: &App,
	auth: &AuthCtx,
	kind: &str,
	id: &str,
	req: PageRequest,
	path: &str,
) -> HrResult<Page<Notification>> {
	let notifiable = app.meta_adapter.read_notifiable(kind, id).await?;

	if !app.gate.allows(auth, "viewNotificationsOf", Some(&notifiable)).await {
		warn!("User {} may not list notifications of {}", auth.user_id, notifiable);
		return Err(Error::PermissionDenied);
	}

	let opts = options(app, Some(notifiable), req);
	let items = app.meta_adapter.list_notifications(&opts).await?;

	Ok(Page::simple(items, opts.page(), opts.per_page, path))
}

// vim: ts=4
