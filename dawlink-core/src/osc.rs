//! Feed decoded OSC packets through the dispatcher.
//!
//! Each OSC message becomes one `address value` notification. Arguments are
//! rendered as text and joined with single spaces, so `/track/1/color` with
//! three ints arrives exactly like the line `/track/1/color 255 128 0`.

use dawlink_model::ModelMirror;
use rosc::{OscMessage, OscPacket, OscType};

use crate::dispatch::{BatchReport, Dispatcher};
use crate::error::DispatchError;

/// Render message arguments to the text payload. `None` when no argument
/// has a textual form.
pub fn message_value(msg: &OscMessage) -> Option<String> {
    let parts: Vec<String> = msg.args.iter().filter_map(arg_text).collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

fn arg_text(arg: &OscType) -> Option<String> {
    match arg {
        OscType::Int(v) => Some(v.to_string()),
        OscType::Long(v) => Some(v.to_string()),
        OscType::Float(v) => Some(v.to_string()),
        OscType::Double(v) => Some(v.to_string()),
        OscType::String(v) => Some(v.clone()),
        OscType::Bool(v) => Some(if *v { "1" } else { "0" }.to_string()),
        _ => None,
    }
}

/// Dispatch every message in a packet, walking bundles in order.
pub fn dispatch_packet(
    dispatcher: &Dispatcher,
    model: &mut ModelMirror,
    packet: &OscPacket,
) -> BatchReport {
    let mut report = BatchReport::default();
    walk_packet(dispatcher, model, packet, &mut report);
    report
}

fn walk_packet(
    dispatcher: &Dispatcher,
    model: &mut ModelMirror,
    packet: &OscPacket,
    report: &mut BatchReport,
) {
    match packet {
        OscPacket::Message(msg) => {
            report.lines += 1;
            let value = message_value(msg);
            if let Err(e) = dispatcher.dispatch(model, &msg.addr, value.as_deref()) {
                report.errors.push(e);
            }
        }
        OscPacket::Bundle(bundle) => {
            for p in &bundle.content {
                walk_packet(dispatcher, model, p, report);
            }
        }
    }
}

/// Decode a raw datagram and dispatch it. A datagram that fails to decode
/// counts as one dropped notification.
pub fn dispatch_datagram(
    dispatcher: &Dispatcher,
    model: &mut ModelMirror,
    datagram: &[u8],
) -> BatchReport {
    match rosc::decoder::decode_udp(datagram) {
        Ok((_, packet)) => dispatch_packet(dispatcher, model, &packet),
        Err(e) => {
            let err = DispatchError::Coercion {
                address: String::new(),
                value: None,
                reason: format!("undecodable OSC datagram: {:?}", e),
            };
            log::error!(target: "osc", "{}", err);
            BatchReport {
                lines: 1,
                errors: vec![err],
            }
        }
    }
}
