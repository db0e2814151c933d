use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn render_text_from_model<T: Serialize + ?Sized>(model: &T) -> String {
    let value = serde_json::to_value(model).unwrap_or(Value::Null);
    render_value(&value, 0)
}

/// Indented `key: value` rendering of a JSON value, nested containers one
/// level deeper per step.
pub fn render_value(value: &Value, indent: usize) -> String {
    let pad = " ".repeat(indent);
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => format!("{pad}{b}\n"),
        Value::Number(n) => format!("{pad}{n}\n"),
        Value::String(s) => {
            let mut out = String::new();
            for line in s.lines() {
                out.push_str(&format!("{pad}{line}\n"));
            }
            if out.is_empty() {
                out.push_str(&format!("{pad}\n"));
            }
            out
        }
        Value::Array(arr) => {
            let mut s = String::new();
            for item in arr {
                match item {
                    Value::Array(_) | Value::Object(_) => {
                        s.push_str(&format!("{pad}-\n"));
                        s.push_str(&render_value(item, indent + 2));
                    }
                    Value::String(text) if text.contains('\n') => {
                        s.push_str(&format!("{pad}-\n"));
                        s.push_str(&render_value(item, indent + 2));
                    }
                    _ => {
                        let rendered = render_value(item, 0);
                        s.push_str(&format!("{}- {}\n", pad, rendered.trim_end()));
                    }
                }
            }
            s
        }
        Value::Object(map) => {
            let mut s = String::new();
            for (k, v) in map {
                match v {
                    Value::Array(arr) if !arr.is_empty() => {
                        s.push_str(&format!("{pad}{k}:\n"));
                        s.push_str(&render_value(v, indent + 2));
                    }
                    Value::Object(obj) if !obj.is_empty() => {
                        s.push_str(&format!("{pad}{k}:\n"));
                        s.push_str(&render_value(v, indent + 2));
                    }
                    Value::Array(_) => s.push_str(&format!("{pad}{k}: []\n")),
                    Value::Object(_) => s.push_str(&format!("{pad}{k}: {{}}\n")),
                    Value::String(str_val) if str_val.contains('\n') => {
                        s.push_str(&format!("{pad}{k}:\n"));
                        s.push_str(&render_value(v, indent + 2));
                    }
                    Value::String(str_val) => s.push_str(&format!("{pad}{k}: {str_val}\n")),
                    value => s.push_str(&format!("{pad}{k}: {value}\n")),
                }
            }
            s
        }
    }
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    pub fn format<T: Serialize>(&self, model: &T) -> String {
        match self.engine {
            OutputFormat::Text => render_text_from_model(model),
            OutputFormat::Json => {
                let mut out = serde_json::to_string_pretty(model).unwrap_or_default();
                out.push('\n');
                out
            }
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
