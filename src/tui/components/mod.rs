//! UI components for the events listing TUI.
//!
//! Components are stateless renderers driven by a view context borrowed from
//! the application model.

mod event_list;
mod filter_form;
mod pager;
mod result_status;

pub use event_list::{EventListComponent, EventListViewContext, describe_event};
pub use filter_form::{DATE_FORMAT, FilterFormComponent, FilterFormViewContext, is_valid_date};
pub use pager::{PagerComponent, PagerViewContext};
pub use result_status::ResultStatus;
