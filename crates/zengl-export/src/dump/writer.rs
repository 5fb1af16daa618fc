use std::fmt::{self, Write};

/// Line-oriented output buffer for the call listing.
#[derive(Debug, Default)]
pub(crate) struct CallWriter {
    out: String,
    calls: usize,
}

impl CallWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one statement and a newline.
    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        // Formatting into a String only fails if a Display impl does.
        let _ = self.out.write_fmt(args);
        self.out.push('\n');
        self.calls += 1;
    }

    /// Ends a block.
    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Statements written so far.
    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Writes one formatted statement: `call!(w, "glLinkProgram(program{});", id)`.
macro_rules! call {
    ($w:expr, $($arg:tt)*) => {
        $w.line(format_args!($($arg)*))
    };
}

pub(crate) use call;

/// C boolean literal.
#[inline]
pub(crate) fn gl_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// `glEnable` or `glDisable`.
#[inline]
pub(crate) fn toggle(value: bool) -> &'static str {
    if value { "glEnable" } else { "glDisable" }
}

/// C string literal. JSON escapes carry over except `\u00XX`, which C
/// rejects for control characters and gets an octal escape instead.
/// Non-ASCII text stays UTF-8.
pub(crate) fn c_string(text: &str) -> String {
    let json = serde_json::Value::from(text).to_string();
    let mut out = String::with_capacity(json.len());
    let mut chars = json.chars();
    while let Some(ch) = chars.next() {
        out.push(ch);
        if ch != '\\' {
            continue;
        }
        match chars.next() {
            Some('u') => {
                out.pop();
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16) {
                    Ok(code) => out.push_str(&format!("\\{code:03o}")),
                    Err(_) => out.push_str(&format!("\\u{hex}")),
                }
            }
            Some(next) => out.push(next),
            None => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_statements_not_blank_lines() {
        let mut w = CallWriter::new();
        call!(w, "glEnable({});", "GL_BLEND");
        w.blank();
        call!(w, "glFlush();");
        assert_eq!(w.calls(), 2);
        assert_eq!(w.finish(), "glEnable(GL_BLEND);\n\nglFlush();\n");
    }

    #[test]
    fn strings_are_escaped() {
        assert_eq!(c_string("a \"b\"\n\tc\\"), r#""a \"b\"\n\tc\\""#);
        assert_eq!(c_string("\x01\x1f7"), r#""\001\0377""#);
        assert_eq!(c_string(r"\u0041"), r#""\\u0041""#);
        assert_eq!(c_string("// é"), "\"// é\"");
    }
}
