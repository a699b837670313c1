//! Track bank and master track handlers.

use dawlink_model::{AutomationMode, Color, ModelMirror, Track, TrackType};

use super::{selector, Route, Selector};
use crate::error::DispatchError;
use crate::value::ValueRange;

#[derive(Debug, Clone, Copy)]
enum TrackTarget {
    Bank(usize),
    Master,
}

impl TrackTarget {
    fn resolve(self, model: &mut ModelMirror) -> Option<&mut Track> {
        match self {
            TrackTarget::Bank(index) => model.track_mut(index),
            TrackTarget::Master => Some(&mut model.master),
        }
    }
}

/// `/track/count` or `/track/<n>/...`
pub(super) fn dispatch_track(
    route: &mut Route<'_>,
    model: &mut ModelMirror,
    range: &ValueRange,
) -> Result<(), DispatchError> {
    let Some(segment) = route.next() else {
        return Err(route.unhandled());
    };
    match selector(segment) {
        Selector::Slot(Some(index)) => dispatch_leaf(route, model, TrackTarget::Bank(index), range),
        Selector::Slot(None) => {
            route.dropped();
            Ok(())
        }
        Selector::Keyword("count") => {
            model.set_track_count(route.count()?);
            Ok(())
        }
        Selector::Keyword(_) => Err(route.unhandled()),
    }
}

/// `/master/...`
pub(super) fn dispatch_master(
    route: &mut Route<'_>,
    model: &mut ModelMirror,
    range: &ValueRange,
) -> Result<(), DispatchError> {
    dispatch_leaf(route, model, TrackTarget::Master, range)
}

fn dispatch_leaf(
    route: &mut Route<'_>,
    model: &mut ModelMirror,
    target: TrackTarget,
    range: &ValueRange,
) -> Result<(), DispatchError> {
    // Selection is a bank-level operation for bank tracks.
    if route.peek() == Some("select") {
        route.next();
        let selected = route.flag()?;
        match target {
            TrackTarget::Bank(index) => {
                if !model.select_track(index, selected) {
                    route.dropped();
                }
            }
            TrackTarget::Master => model.master.selected = selected,
        }
        return Ok(());
    }

    let Some(track) = target.resolve(model) else {
        route.dropped();
        return Ok(());
    };
    apply_track_leaf(route, track, range)
}

fn apply_track_leaf(
    route: &mut Route<'_>,
    track: &mut Track,
    range: &ValueRange,
) -> Result<(), DispatchError> {
    let Some(leaf) = route.next() else {
        return Err(route.unhandled());
    };
    match leaf {
        "exists" => track.exists = route.flag()?,
        "active" => track.active = route.flag()?,
        "type" => match TrackType::from_index(i64::from(route.integer()?)) {
            Some(track_type) => track.track_type = track_type,
            None => log::debug!(target: "dispatch", "ignoring track type {:?}", route.value),
        },
        "name" => track.name = route.text()?,
        "volume" => match route.next() {
            None => track.volume = range.to_raw(route.number()?),
            Some("str") => track.volume_str = route.text()?,
            Some(_) => return Err(route.unhandled()),
        },
        "pan" => match route.next() {
            None => track.pan = range.to_raw(route.number()?),
            Some("str") => track.pan_str = route.text()?,
            Some(_) => return Err(route.unhandled()),
        },
        "vu" => {
            let vu = range.to_raw(route.number()?);
            track.vu_left = vu;
            track.vu_right = vu;
        }
        "vuleft" => track.vu_left = range.to_raw(route.number()?),
        "vuright" => track.vu_right = range.to_raw(route.number()?),
        "mute" => track.mute = route.flag()?,
        "solo" => track.solo = route.flag()?,
        "recarm" => track.rec_arm = route.flag()?,
        "monitor" => track.monitor = route.flag()?,
        "autoMonitor" => track.auto_monitor = route.flag()?,
        "automode" => match AutomationMode::from_index(i64::from(route.integer()?)) {
            Some(mode) => track.automation = mode,
            None => log::debug!(target: "dispatch", "ignoring automation mode {:?}", route.value),
        },
        "color" => track.color = parse_color(route)?,
        "repeatActive" => track.repeat_active = route.flag()?,
        "repeatNoteLength" => track.repeat_note_length = route.number()?,
        "send" => return dispatch_send(route, track, range),
        _ => return Err(route.unhandled()),
    }
    Ok(())
}

/// `send/count` or `send/<n>/{name,volume,volume/str}`
fn dispatch_send(
    route: &mut Route<'_>,
    track: &mut Track,
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
            track.sends.set_count(route.count()?);
            return Ok(());
        }
        Selector::Keyword(_) => return Err(route.unhandled()),
    };
    let Some(send) = track.send_mut(index) else {
        route.dropped();
        return Ok(());
    };
    match (route.next(), route.next()) {
        (Some("name"), None) => send.name = route.text()?,
        (Some("volume"), None) => send.volume = range.to_raw(route.number()?),
        (Some("volume"), Some("str")) => send.volume_str = route.text()?,
        _ => return Err(route.unhandled()),
    }
    Ok(())
}

/// Exactly three integer components in 0..=255, all or nothing.
fn parse_color(route: &Route<'_>) -> Result<Color, DispatchError> {
    route.finish()?;
    let components: Vec<&str> = route.value.unwrap_or("").split_whitespace().collect();
    let &[red, green, blue] = components.as_slice() else {
        return Err(DispatchError::Arity {
            address: route.address.to_string(),
            components: components.iter().map(|c| c.to_string()).collect(),
        });
    };
    let channel = |c: &str| c.parse::<u8>().map_err(|e| route.coercion(e.to_string()));
    Ok(Color::from_rgb8(channel(red)?, channel(green)?, channel(blue)?))
}
