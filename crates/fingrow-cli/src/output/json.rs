use serde_json::Value;

/// Write JSON to stdout: indented on a terminal, one line when piped.
pub fn print_json(value: &Value) {
    let rendered = if atty::is(atty::Stream::Stdout) {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match rendered {
        Ok(s) => println!("{}", s),
        Err(e) => tracing::error!(error = %e, "failed to serialise output"),
    }
}
