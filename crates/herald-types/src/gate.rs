//! Host authorization seam.
//!
//! Herald never decides access itself: every listing is checked against
//! the host's [`Gate`] first, and a denial surfaces as HTTP 403.

use async_trait::async_trait;

use crate::meta_adapter::NotifiableRef;

// AuthCtx //
//*********//

/// Identity of the acting user, injected into request extensions by the
/// host's authentication middleware.
#[derive(Clone, Debug)]
pub struct AuthCtx {
	pub user_id: Box<str>,
	pub roles: Box<[Box<str>]>,
}

impl AuthCtx {
	pub fn new(user_id: impl Into<Box<str>>) -> AuthCtx {
		AuthCtx { user_id: user_id.into(), roles: Box::new([]) }
	}

	pub fn with_roles(
		user_id: impl Into<Box<str>>,
		roles: impl IntoIterator<Item = impl Into<Box<str>>>,
	) -> AuthCtx {
		AuthCtx {
			user_id: user_id.into(),
			roles: roles.into_iter().map(|role| role.into()).collect(),
		}
	}

	pub fn has_role(&self, role: &str) -> bool {
		self.roles.iter().any(|r| r.as_ref() == role)
	}
}

// Gate //
//******//

/// Authorization decisions delegated to the host. `resource` is the
/// notifiable under inspection, `None` for collection-level actions.
#[async_trait]
pub trait Gate: Send + Sync {
	async fn allows(&self, auth: &AuthCtx, action: &str, resource: Option<&NotifiableRef>)
		-> bool;
}

/// Denies everything. Used until the host wires a real gate, so a missing
/// policy reads as forbidden instead of open access.
pub struct DenyAll;

#[async_trait]
impl Gate for DenyAll {
	async fn allows(
		&self,
		_auth: &AuthCtx,
		_action: &str,
		_resource: Option<&NotifiableRef>,
	) -> bool {
		false
	}
}

/// Adapts a plain closure to a [`Gate`]. This is how hosts and tests
/// define policies without a dedicated type.
pub struct GateFn<F>(pub F);

#[async_trait]
impl<F> Gate for GateFn<F>
where
	F: Fn(&AuthCtx, &str, Option<&NotifiableRef>) -> bool + Send + Sync,
{
	async fn allows(&self, auth: &AuthCtx, action: &str, resource: Option<&NotifiableRef>)
		-> bool {
		(self.0)(auth, action, resource)
	}
}


// vim: ts=4
