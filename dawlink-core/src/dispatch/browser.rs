use dawlink_model::Browser;

use super::{selector, Route, Selector};
use crate::error::DispatchError;

/// `/browser/selected <n>` and `/browser/result/...`
pub(super) fn dispatch_browser(route: &mut Route<'_>, browser: &mut Browser) -> Result<(), DispatchError> {
    match route.next() {
        Some("selected") => {
            let number = route.integer()?;
            if number <= 0 {
                browser.selected_index = None;
                return Ok(());
            }
            let index = (number - 1) as usize;
            if index < browser.results.count() {
                browser.selected_index = Some(index);
            } else {
                route.dropped();
            }
            Ok(())
        }
        Some("result") => dispatch_result(route, browser),
        _ => Err(route.unhandled()),
    }
}

fn dispatch_result(route: &mut Route<'_>, browser: &mut Browser) -> Result<(), DispatchError> {
    let Some(segment) = route.next() else {
        return Err(route.unhandled());
    };
    let index = match selector(segment) {
        Selector::Slot(Some(index)) => index,
        Selector::Slot(None) => {
            route.dropped();
            return Ok(());
        }
        Selector::Keyword("count") => {
            browser.set_result_count(route.count()?);
            return Ok(());
        }
        Selector::Keyword(_) => return Err(route.unhandled()),
    };
    let Some(result) = browser.result_mut(index) else {
        route.dropped();
        return Ok(());
    };
    match route.next() {
        Some("name") => result.name = route.optional_text()?,
        _ => return Err(route.unhandled()),
    }
    Ok(())
}
