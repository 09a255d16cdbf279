//! UI Components
//!
//! Pages and the form building blocks they are made of.

mod application_form;
mod form_actions;
mod form_fields;
mod home_page;
mod news_page;
mod parent_column;
mod photo_picker;
mod previous_school_table;
mod site_header;

pub use application_form::ApplicationForm;
pub use home_page::{HomePage, NotFound};
pub use news_page::NewsPage;
pub use site_header::SiteHeader;
