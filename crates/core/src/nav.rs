//! Admin navigation menu.

use serde::Serialize;

/// Icon shown next to a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    /// Dashboard overview.
    Dashboard,
    /// Inventory / products.
    Inventory,
    /// Categories.
    Category,
    /// Orders / receipts.
    Receipt,
}

/// A static menu action routing to a fixed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Visible label.
    pub label: &'static str,
    /// Route path.
    pub path: &'static str,
    /// Icon.
    pub icon: NavIcon,
}

/// Admin menu entries in display order.
pub static ADMIN_MENU: [NavItem; 4] = [
    NavItem {
        label: "Admin Dashboard",
        path: "/admin",
        icon: NavIcon::Dashboard,
    },
    NavItem {
        label: "Manage Products",
        path: "/admin/products/new",
        icon: NavIcon::Inventory,
    },
    NavItem {
        label: "Manage Categories",
        path: "/admin/categories/new",
        icon: NavIcon::Category,
    },
    NavItem {
        label: "Manage Orders",
        path: "/admin/orders",
        icon: NavIcon::Receipt,
    },
];

/// Looks up the menu entry routing to `path`.
#[must_use]
pub fn find_by_path(path: &str) -> Option<&'static NavItem> {
    ADMIN_MENU.iter().find(|item| item.path == path)
}
