//! HTML page and form handlers for the web dashboard.

mod dashboard;
mod login;

pub use dashboard::{
    add_city_form_handler, dashboard_handler, logout_handler, remove_city_form_handler,
};
pub use login::{login_page_handler, login_submit_handler};
