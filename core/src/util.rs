use lazy_static::lazy_static;
use ron::extensions::Extensions;

lazy_static! {
    /// RON options shared by every config file: `Some(..)` may be omitted around optional values.
    pub static ref RON: ron::Options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
}

/// Decode captured process output, dropping the trailing newline most CLIs print.
pub fn trimmed_output(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_cli_output() {
        assert_eq!(trimmed_output(b"E2QWRUHAPOMQZL\n"), "E2QWRUHAPOMQZL");
        assert_eq!(trimmed_output(b""), "");
    }

    #[test]
    fn ron_accepts_implicit_some() {
        #[derive(serde::Deserialize)]
        struct Probe {
            name: Option<String>,
        }

        let probe: Probe = RON.from_str(r#"(name: "x")"#).unwrap();
        assert_eq!(probe.name.as_deref(), Some("x"));
    }
}
