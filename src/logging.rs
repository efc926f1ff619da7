//! JSON event lines behind the `log` facade.
//!
//! Each record becomes one object: `ts`, `level`, `event` (the message),
//! `target`, then any key-value pairs attached to the record. The browser
//! build writes to the console; the native build writes to stdout.

use log::{kv, Level, LevelFilter, Log, Metadata, Record};
use serde_json::{Map, Number, Value};

static LOGGER: JsonLogger = JsonLogger;

struct JsonLogger;

impl Log for JsonLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        emit(record.level(), &format_event(record));
    }

    fn flush(&self) {}
}

/// Install the logger. Later calls keep the first logger and only adjust
/// the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        _ => None,
    }
}

fn format_event(record: &Record) -> Value {
    let mut payload = Map::new();
    payload.insert(
        "ts".to_string(),
        Value::Number(Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        Value::String(record.level().as_str().to_ascii_lowercase()),
    );
    payload.insert(
        "event".to_string(),
        Value::String(record.args().to_string()),
    );
    payload.insert(
        "target".to_string(),
        Value::String(record.target().to_string()),
    );

    let mut fields = FieldCollector(&mut payload);
    let _ = record.key_values().visit(&mut fields);

    Value::Object(payload)
}

struct FieldCollector<'a>(&'a mut Map<String, Value>);

impl<'kvs> kv::VisitSource<'kvs> for FieldCollector<'_> {
    fn visit_pair(&mut self, key: kv::Key<'kvs>, value: kv::Value<'kvs>) -> Result<(), kv::Error> {
        let value =
            serde_json::to_value(&value).unwrap_or_else(|_| Value::String(value.to_string()));
        self.0.insert(key.as_str().to_string(), value);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    (js_sys::Date::now() / 1_000.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, event: &Value) {
    let line = wasm_bindgen::JsValue::from_str(&event.to_string());
    match level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, event: &Value) {
    println!("{event}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_fields_are_flattened_into_the_event() {
        let fields: [(&str, kv::Value); 2] = [
            ("status", kv::Value::from(200u16)),
            ("path", kv::Value::from("/index.html")),
        ];

        let event = format_event(
            &Record::builder()
                .args(format_args!("request_complete"))
                .level(Level::Info)
                .target("portfolio::backend")
                .key_values(&fields)
                .build(),
        );

        assert_eq!(event["level"], "info");
        assert_eq!(event["event"], "request_complete");
        assert_eq!(event["target"], "portfolio::backend");
        assert_eq!(event["status"], 200);
        assert_eq!(event["path"], "/index.html");
        assert!(event["ts"].as_u64().is_some());
    }

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(parse_level(" DEBUG "), Some(LevelFilter::Debug));
        assert_eq!(parse_level("warn"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("verbose"), None);
    }
}
