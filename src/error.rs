//! Result envelopes for the `*_res` methods: `{ok: true, value}` or
//! `{ok: false, error: {code, message, data}}`. Codes come from the core
//! error types so JS can branch on them.

use colorgraph::error::{ConfigError, GraphError};
use wasm_bindgen::JsValue;

use crate::interop::js_obj;

pub fn ok(value: JsValue) -> JsValue {
    js_obj(&[("ok", JsValue::from_bool(true)), ("value", value)])
}

/// `data` is `null` when the error carries nothing beyond its message.
pub fn err(code: &str, message: impl Into<String>, data: JsValue) -> JsValue {
    let error = js_obj(&[
        ("code", JsValue::from_str(code)),
        ("message", JsValue::from_str(&message.into())),
        ("data", data),
    ]);
    js_obj(&[("ok", JsValue::from_bool(false)), ("error", error)])
}

fn range(param: &str, min: f64, max: f64, got: f64) -> JsValue {
    js_obj(&[
        ("param", JsValue::from_str(param)),
        ("min", JsValue::from_f64(min)),
        ("max", JsValue::from_f64(max)),
        ("got", JsValue::from_f64(got)),
    ])
}

pub fn from_graph_error(e: &GraphError) -> JsValue {
    let data = match *e {
        GraphError::UnknownVertex { id } => js_obj(&[
            ("kind", JsValue::from_str("vertex")),
            ("id", JsValue::from(id)),
        ]),
        GraphError::SelfLoop { id } => js_obj(&[("id", JsValue::from(id))]),
        GraphError::NonFinite { param } => js_obj(&[("param", JsValue::from_str(param))]),
        GraphError::OutOfRange { param, min, max, got } => {
            range(param, min as f64, max as f64, got as f64)
        }
        GraphError::LimitExceeded { kind, limit } => js_obj(&[
            ("kind", JsValue::from_str(kind)),
            ("limit", JsValue::from_f64(limit as f64)),
        ]),
    };
    err(e.code(), e.to_string(), data)
}

pub fn from_config_error(e: &ConfigError) -> JsValue {
    let data = match *e {
        ConfigError::OutOfRange { param, min, max, got } => range(param, min, max, got),
        ConfigError::Parse(_) => JsValue::NULL,
    };
    err(e.code(), e.to_string(), data)
}
