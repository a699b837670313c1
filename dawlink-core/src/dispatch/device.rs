//! Cursor device handlers, including siblings and the parameter page.

use dawlink_model::CursorDevice;

use super::{selector, Route, Selector};
use crate::error::DispatchError;
use crate::value::ValueRange;

pub(super) fn dispatch_device(
    route: &mut Route<'_>,
    device: &mut CursorDevice,
    range: &ValueRange,
) -> Result<(), DispatchError> {
    let Some(command) = route.next() else {
        return Err(route.unhandled());
    };
    match command {
        "count" => device.count = route.integer()?,
        "exists" => device.exists = route.flag()?,
        "position" => device.position = route.integer()?,
        "bypass" => device.set_bypass(route.flag()?),
        "name" => device.name = route.text()?,
        "window" => device.window_open = route.flag()?,
        "expand" => device.expanded = route.flag()?,
        "sibling" => return dispatch_sibling(route, device),
        "param" => return dispatch_param(route, device, range),
        _ => return Err(route.unhandled()),
    }
    Ok(())
}

fn dispatch_sibling(route: &mut Route<'_>, device: &mut CursorDevice) -> Result<(), DispatchError> {
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
            device.siblings.set_count(route.count()?);
            return Ok(());
        }
        Selector::Keyword(_) => return Err(route.unhandled()),
    };
    let Some(sibling) = device.sibling_mut(index) else {
        route.dropped();
        return Ok(());
    };
    match route.next() {
        Some("name") => sibling.name = route.text()?,
        _ => return Err(route.unhandled()),
    }
    Ok(())
}

fn dispatch_param(
    route: &mut Route<'_>,
    device: &mut CursorDevice,
    range: &ValueRange,
) -> Result<(), DispatchError> {
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
            device.parameters.set_count(route.count()?);
            return Ok(());
        }
        Selector::Keyword(_) => return Err(route.unhandled()),
    };
    let Some(param) = device.parameter_mut(index) else {
        route.dropped();
        return Ok(());
    };
    match (route.next(), route.next()) {
        (Some("name"), None) => param.name = route.text()?,
        (Some("value"), None) => param.value = range.to_raw(route.number()?),
        (Some("value"), Some("str")) => param.value_str = route.text()?,
        _ => return Err(route.unhandled()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::dispatch::Dispatcher;
    use crate::error::DispatchError;
    use dawlink_model::ModelMirror;

    fn send(model: &mut ModelMirror, address: &str, value: &str) -> Result<(), DispatchError> {
        Dispatcher::default().dispatch(model, address, Some(value))
    }

    #[test]
    fn device_attributes() {
        let mut model = ModelMirror::default();
        send(&mut model, "/device/count", "3").unwrap();
        send(&mut model, "/device/exists", "1").unwrap();
        send(&mut model, "/device/position", "2").unwrap();
        send(&mut model, "/device/name", "ReaEQ").unwrap();
        send(&mut model, "/device/window", "1").unwrap();
        send(&mut model, "/device/expand", "1").unwrap();
        let device = &model.device;
        assert_eq!(device.count, 3);
        assert_eq!(device.position, 2);
        assert_eq!(device.name, "ReaEQ");
        assert!(device.exists && device.window_open && device.expanded);
    }

    #[test]
    fn bypass_disables_device() {
        let mut model = ModelMirror::default();
        send(&mut model, "/device/bypass", "1").unwrap();
        assert!(!model.device.enabled);
        send(&mut model, "/device/bypass", "0").unwrap();
        assert!(model.device.enabled);
    }

    #[test]
    fn parameter_value_and_display() {
        let mut model = ModelMirror::default();
        send(&mut model, "/device/param/4/value", "0.75").unwrap();
        send(&mut model, "/device/param/4/value/str", "-3.1 dB").unwrap();
        send(&mut model, "/device/param/4/name", "Gain").unwrap();
        let param = model.parameter(3).unwrap();
        assert_eq!(param.value, 767);
        assert_eq!(param.value_str, "-3.1 dB");
        assert_eq!(param.name, "Gain");
    }

    #[test]
    fn parameter_page_is_bounded() {
        let mut model = ModelMirror::default();
        let before = model.clone();
        send(&mut model, "/device/param/9/value", "1").unwrap();
        assert_eq!(model, before);
        send(&mut model, "/device/param/count", "12").unwrap();
        send(&mut model, "/device/param/9/value", "1").unwrap();
        assert_eq!(model.parameter(8).unwrap().value, 1023);
    }

    #[test]
    fn sibling_names() {
        let mut model = ModelMirror::default();
        send(&mut model, "/device/sibling/2/name", "ReaComp").unwrap();
        assert_eq!(model.device.siblings.get(1).unwrap().name, "ReaComp");
        assert!(send(&mut model, "/device/sibling/2/bypass", "1").is_err());
        assert!(send(&mut model, "/device/knob", "1").is_err());
    }
}
