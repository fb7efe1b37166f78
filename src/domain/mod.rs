//! Build-time domain logic: daily results and calendar windows.

mod calendar;
mod result;

pub use calendar::{adjust_to_monday, adjust_to_sunday, weeks, CalendarDay, Window};
pub use result::{earliest_date, DailyResult, ModelResults};
