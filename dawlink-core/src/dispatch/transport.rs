//! Flat transport commands (`/play`, `/tempo`, `/time/str`, ...).

use dawlink_model::Transport;

use super::Route;
use crate::error::DispatchError;

pub(super) fn dispatch_transport(
    command: &str,
    route: &mut Route<'_>,
    transport: &mut Transport,
) -> Result<(), DispatchError> {
    match command {
        "click" => transport.click = route.flag()?,
        "preroll" => transport.preroll_ms = route.integer()?,
        "prerollClick" => transport.preroll_click = route.flag()?,
        "play" => transport.play = route.flag()?,
        // stop reports the inverse of play
        "stop" => transport.play = route.number()? == 0.0,
        "repeat" | "loop" => transport.looping = route.flag()?,
        "record" => transport.record = route.flag()?,
        "tempo" => transport.tempo = route.number()?,
        "time" => match route.next() {
            None => transport.position = route.number()?,
            Some("str") => transport.position_str = route.text()?,
            Some(_) => return Err(route.unhandled()),
        },
        "beat" => transport.beats = route.text()?,
        "numerator" => transport.set_numerator(route.integer()?),
        "denominator" => transport.set_denominator(route.integer()?),
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
    fn play_uses_threshold() {
        let mut model = ModelMirror::default();
        send(&mut model, "/play", "0.4").unwrap();
        assert!(model.transport.play);
        send(&mut model, "/play", "0.0").unwrap();
        assert!(!model.transport.play);
    }

    #[test]
    fn stop_is_play_equals_zero() {
        let mut model = ModelMirror::default();
        send(&mut model, "/stop", "0.0").unwrap();
        assert!(model.transport.play);
        send(&mut model, "/stop", "1").unwrap();
        assert!(!model.transport.play);
    }

    #[test]
    fn time_keeps_number_and_string_apart() {
        let mut model = ModelMirror::default();
        send(&mut model, "/time", "17.25").unwrap();
        send(&mut model, "/time/str", "005:02:01").unwrap();
        assert_eq!(model.transport.position, 17.25);
        assert_eq!(model.transport.position_str, "005:02:01");
        assert!(send(&mut model, "/time/bars", "1").is_err());
    }

    #[test]
    fn numerator_ignores_zero_without_error() {
        let mut model = ModelMirror::default();
        send(&mut model, "/numerator", "3").unwrap();
        send(&mut model, "/numerator", "0").unwrap();
        send(&mut model, "/denominator", "-8").unwrap();
        assert_eq!(model.transport.time_signature(), (3, 4));
    }

    #[test]
    fn preroll_and_flags() {
        let mut model = ModelMirror::default();
        send(&mut model, "/preroll", "2000").unwrap();
        send(&mut model, "/prerollClick", "1").unwrap();
        send(&mut model, "/click", "1").unwrap();
        send(&mut model, "/repeat", "1").unwrap();
        send(&mut model, "/tempo", "98.5").unwrap();
        send(&mut model, "/beat", "3.2.1").unwrap();
        let t = &model.transport;
        assert_eq!(t.preroll_ms, 2000);
        assert!(t.preroll_click && t.click && t.looping);
        assert_eq!(t.tempo, 98.5);
        assert_eq!(t.beats, "3.2.1");
        send(&mut model, "/loop", "0").unwrap();
        assert!(!model.transport.looping);
    }

    #[test]
    fn non_numeric_tempo_leaves_state() {
        let mut model = ModelMirror::default();
        let err = send(&mut model, "/tempo", "fast").unwrap_err();
        assert!(matches!(err, DispatchError::Coercion { .. }));
        assert_eq!(model.transport.tempo, 120.0);
    }
}
