use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a raw calculator input document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means stdin, anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Read a raw input document into an untyped tree for [`crate::scoring::decode`].
///
/// `.json` files are parsed as JSON, other files as YAML. Stdin is tried as
/// JSON first, then YAML.
pub fn load_raw_input(source: &InputSource) -> Result<Value> {
    match source {
        InputSource::Stdin => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read input from stdin")?;
            parse_any(&content).context("Failed to parse input from stdin")
        }
        InputSource::File(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file at {}", path.display()))?;
            let value: Result<Value> = if is_json(path) {
                serde_json::from_str(&content).map_err(anyhow::Error::from)
            } else {
                serde_saphyr::from_str(&content).map_err(anyhow::Error::from)
            };
            value.with_context(|| format!("Failed to parse input file {}", path.display()))
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Parse a document that may be JSON or YAML.
pub fn parse_any(content: &str) -> Result<Value> {
    match serde_json::from_str(content) {
        Ok(value) => Ok(value),
        Err(json_err) => {
            debug!(error = %json_err, "input is not JSON, trying YAML");
            serde_saphyr::from_str(content).context("input is neither valid JSON nor valid YAML")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_source_from_arg() {
        assert_eq!(InputSource::from_arg("-"), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg("me.yaml"),
            InputSource::File(PathBuf::from("me.yaml"))
        );
        assert_eq!(InputSource::Stdin.describe(), "<stdin>");
    }

    #[test]
    fn test_parse_any_json_and_yaml() {
        let json = parse_any(r#"{"applicant": {"age": 30}}"#).unwrap();
        assert_eq!(json["applicant"]["age"], 30);

        let yaml = parse_any("applicant:\n  age: 30\n  hasFamilyInQuebec: true\n").unwrap();
        assert_eq!(yaml["applicant"]["age"], 30);
        assert_eq!(yaml["applicant"]["hasFamilyInQuebec"], true);
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"applicant": {{"educationLevel": "none"}}}}"#).unwrap();

        let value = load_raw_input(&InputSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!(value["applicant"]["educationLevel"], "none");
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "applicant:\n  validatedJobOffer: inside_montreal").unwrap();

        let value = load_raw_input(&InputSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!(value["applicant"]["validatedJobOffer"], "inside_montreal");
    }

    #[test]
    fn test_demo_inputs_score() {
        let demos = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos");
        let cases = [("single.yaml", 1160, false), ("with-spouse.json", 547, true)];

        for (name, total, has_spouse) in cases {
            let raw = load_raw_input(&InputSource::File(demos.join(name))).unwrap();
            let input = crate::scoring::decode(&raw).unwrap();
            let result = crate::scoring::calculate_points(&input);
            assert_eq!(result.total_points, total, "{name}");
            assert_eq!(result.has_spouse, has_spouse, "{name}");
        }
    }

    #[test]
    fn test_missing_file_has_context() {
        let missing = InputSource::File(PathBuf::from("/nonexistent/input.yaml"));
        let err = load_raw_input(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }
}
