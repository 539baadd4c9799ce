//! Admin route guard

use crate::auth::AuthManager;

/// Client-side routes the navigation layer can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Storefront,
    OrderConfirm,
    AdminLogin,
    AdminDashboard,
    AdminProducts,
    AdminOrders,
}

impl Route {
    /// Canonical path, matching the web frontend's routing table
    pub fn path(&self) -> &'static str {
        match self {
            Route::Storefront => "/",
            Route::OrderConfirm => "/pedido",
            Route::AdminLogin => "/admin/login",
            Route::AdminDashboard => "/admin",
            Route::AdminProducts => "/admin/produtos",
            Route::AdminOrders => "/admin/pedidos",
        }
    }
}

/// Receives redirects issued by the guard and the response classifier
pub trait Navigator: Send + Sync {
    fn redirect(&self, route: Route);
}

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Deny,
}

/// Gate consulted before entering any admin route.
///
/// A single point-in-time check, no retry and no async wait: an expired
/// session is evicted first, then the navigation is either allowed or
/// redirected to the login route and denied.
pub fn admin_guard(auth: &AuthManager, navigator: &dyn Navigator) -> GuardDecision {
    auth.evict_if_expired();
    if auth.is_authenticated() {
        GuardDecision::Allow
    } else {
        navigator.redirect(Route::AdminLogin);
        GuardDecision::Deny
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::AdminLogin.path(), "/admin/login");
        assert_eq!(Route::Storefront.path(), "/");
    }
}
