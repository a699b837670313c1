//! Project, clip, groove and quantize handlers.

use dawlink_model::{Clip, Groove, GrooveParam, Project, Quantize};

use super::Route;
use crate::error::DispatchError;

pub(super) fn dispatch_project(route: &mut Route<'_>, project: &mut Project) -> Result<(), DispatchError> {
    match route.next() {
        Some("name") => project.name = route.text()?,
        Some("engine") => project.engine_active = route.flag()?,
        _ => return Err(route.unhandled()),
    }
    Ok(())
}

pub(super) fn dispatch_clip(route: &mut Route<'_>, clip: &mut Clip) -> Result<(), DispatchError> {
    match route.next() {
        Some("playStart") => clip.play_start = route.number()?,
        Some("playEnd") => clip.play_end = route.number()?,
        // Loop bounds are reported separately and not mirrored.
        Some("loopStart") | Some("loopEnd") => route.finish()?,
        _ => return Err(route.unhandled()),
    }
    Ok(())
}

pub(super) fn dispatch_groove(route: &mut Route<'_>, groove: &mut Groove) -> Result<(), DispatchError> {
    let Some(param) = route.next().and_then(GrooveParam::from_name) else {
        return Err(route.unhandled());
    };
    groove.set(param, route.number()?);
    Ok(())
}

pub(super) fn dispatch_quantize(route: &mut Route<'_>, quantize: &mut Quantize) -> Result<(), DispatchError> {
    match route.next() {
        Some("strength") => quantize.strength = route.number()?,
        _ => return Err(route.unhandled()),
    }
    Ok(())
}
