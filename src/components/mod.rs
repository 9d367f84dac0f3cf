//! UI Components
//!
//! Leptos components for the storefront pages.

mod cart_sidebar;
mod checkout_form;
mod issue_reports;
mod payment_modal;
mod product_card;
mod product_grid;
mod toast_host;

pub use cart_sidebar::CartSidebar;
pub use checkout_form::CheckoutForm;
pub use issue_reports::IssueReportsPanel;
pub use payment_modal::PaymentModal;
pub use product_card::ProductCard;
pub use product_grid::ProductGrid;
pub use toast_host::ToastHost;
