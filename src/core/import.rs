use crate::domain::model::{ImportSummary, Row};
use crate::domain::ports::{Importer, Storage};
use crate::utils::error::{DemoError, Result};
use async_trait::async_trait;

/// Rows with fewer fields than this are dropped during validation.
pub const MIN_FIELDS: usize = 2;

pub const DEFAULT_INPUT: &str = "data.csv";
pub const DEFAULT_CSV_OUTPUT: &str = "output.csv";
pub const DEFAULT_JSON_OUTPUT: &str = "output.json";

/// Drives `read → parse → validate → save`. Reading is fixed here; the
/// remaining steps come from the importer.
pub struct ImportEngine<S: Storage, I: Importer> {
    storage: S,
    importer: I,
}

impl<S: Storage, I: Importer> ImportEngine<S, I> {
    pub fn new(storage: S, importer: I) -> Self {
        Self { storage, importer }
    }

    pub async fn run(&self, input: &str) -> Result<ImportSummary> {
        tracing::info!("Starting {} import from {}", self.importer.name(), input);

        let bytes = self.storage.read_file(input).await?;
        let data = String::from_utf8_lossy(&bytes);
        tracing::debug!("Read {} bytes", bytes.len());

        let parsed = self.importer.parse(&data)?;
        let parsed_count = parsed.len();
        tracing::debug!("Parsed {} rows", parsed_count);

        let validated = self.importer.validate(parsed);
        let retained = validated.len();
        tracing::debug!(
            "Validated {} rows, dropped {}",
            retained,
            parsed_count - retained
        );

        let output = self.importer.save(validated).await?;
        tracing::info!("Saved {} rows to {}", retained, output);

        Ok(ImportSummary {
            input: input.to_string(),
            output,
            parsed: parsed_count,
            retained,
        })
    }
}

fn keep_rows_with_min_fields(rows: Vec<Row>) -> Vec<Row> {
    rows.into_iter()
        .filter(|row| row.field_count() >= MIN_FIELDS)
        .collect()
}

/// Splits on commas with no quoting. Trailing empty fields are not counted,
/// so `"a,"` yields a single field.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields: Vec<String> = line.split(',').map(str::to_string).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

pub struct CsvImporter<S: Storage> {
    storage: S,
    output_file: String,
}

impl<S: Storage> CsvImporter<S> {
    pub fn new(storage: S) -> Self {
        Self::with_output(storage, DEFAULT_CSV_OUTPUT.to_string())
    }

    pub fn with_output(storage: S, output_file: String) -> Self {
        Self {
            storage,
            output_file,
        }
    }
}

#[async_trait]
impl<S: Storage> Importer for CsvImporter<S> {
    fn name(&self) -> &str {
        "CSV"
    }

    /// Splits on `\n`, dropping one trailing `\r` per line and any trailing blank lines.
    fn parse(&self, data: &str) -> Result<Vec<Row>> {
        let mut lines: Vec<&str> = data
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        Ok(lines
            .into_iter()
            .map(|line| Row {
                raw: line.to_string(),
                fields: split_fields(line),
            })
            .collect())
    }

    fn validate(&self, rows: Vec<Row>) -> Vec<Row> {
        keep_rows_with_min_fields(rows)
    }

    async fn save(&self, rows: Vec<Row>) -> Result<String> {
        let mut content = String::new();
        for row in &rows {
            content.push_str(&row.raw);
            content.push('\n');
        }
        self.storage
            .write_file(&self.output_file, content.as_bytes())
            .await?;
        Ok(self.output_file.clone())
    }
}

pub struct JsonImporter<S: Storage> {
    storage: S,
    output_file: String,
}

impl<S: Storage> JsonImporter<S> {
    pub fn new(storage: S) -> Self {
        Self::with_output(storage, DEFAULT_JSON_OUTPUT.to_string())
    }

    pub fn with_output(storage: S, output_file: String) -> Self {
        Self {
            storage,
            output_file,
        }
    }
}

fn value_to_field(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl<S: Storage> Importer for JsonImporter<S> {
    fn name(&self) -> &str {
        "JSON"
    }

    fn parse(&self, data: &str) -> Result<Vec<Row>> {
        let document: serde_json::Value =
            serde_json::from_str(data).map_err(|e| DemoError::ParseError {
                message: format!("input is not valid JSON: {}", e),
            })?;

        let serde_json::Value::Array(items) = document else {
            return Err(DemoError::ParseError {
                message: "expected a top-level JSON array".to_string(),
            });
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let fields: Vec<String> = match item {
                    serde_json::Value::Array(values) => values.iter().map(value_to_field).collect(),
                    serde_json::Value::Object(map) => map.values().map(value_to_field).collect(),
                    other => {
                        return Err(DemoError::ParseError {
                            message: format!(
                                "element {} must be an array or object, found {}",
                                index, other
                            ),
                        })
                    }
                };
                Ok(Row {
                    raw: fields.join(","),
                    fields,
                })
            })
            .collect()
    }

    fn validate(&self, rows: Vec<Row>) -> Vec<Row> {
        keep_rows_with_min_fields(rows)
    }

    async fn save(&self, rows: Vec<Row>) -> Result<String> {
        let records: Vec<&Vec<String>> = rows.iter().map(|row| &row.fields).collect();
        let json = serde_json::to_string_pretty(&records)?;
        self.storage
            .write_file(&self.output_file, json.as_bytes())
            .await?;
        Ok(self.output_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), data.as_bytes().to_vec());
            Self {
                files: Arc::new(Mutex::new(files)),
            }
        }

        async fn get_file(&self, path: &str) -> Option<String> {
            let files = self.files.lock().await;
            files
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                DemoError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_split_fields_drops_trailing_empties() {
        assert_eq!(split_fields("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_fields("a,"), vec!["a"]);
        assert_eq!(split_fields("a,,"), vec!["a"]);
        assert_eq!(split_fields(",b"), vec!["", "b"]);
        assert!(split_fields("").is_empty());
    }

    #[test]
    fn test_csv_validate_keeps_rows_with_two_fields() {
        let importer = CsvImporter::new(MockStorage::with_file("x", ""));
        let rows = importer
            .parse("name,age\nsolo\nbob,42\n\ncarol,\n,dave")
            .unwrap();
        assert_eq!(rows.len(), 6);

        let kept = importer.validate(rows);
        let raw: Vec<&str> = kept.iter().map(|row| row.raw.as_str()).collect();
        assert_eq!(raw, vec!["name,age", "bob,42", ",dave"]);
    }

    #[test]
    fn test_csv_parse_strips_carriage_returns() {
        let importer = CsvImporter::new(MockStorage::with_file("x", ""));
        let rows = importer.parse("a,b\r\nc,d\r\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].raw, "a,b");
        assert_eq!(rows[1].fields, vec!["c", "d"]);

        let rows = importer.parse("a,b\r\nc,d\r").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].raw, "c,d");
        assert_eq!(rows[1].fields, vec!["c", "d"]);
    }

    #[test]
    fn test_csv_parse_ignores_trailing_blank_lines() {
        let importer = CsvImporter::new(MockStorage::with_file("x", ""));

        let rows = importer.parse("a,b\n\n\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].raw, "a,b");

        let rows = importer.parse("a,b\n\nc,d\r\n\r\n").unwrap();
        let raw: Vec<&str> = rows.iter().map(|row| row.raw.as_str()).collect();
        assert_eq!(raw, vec!["a,b", "", "c,d"]);

        assert!(importer.parse("").unwrap().is_empty());
        assert!(importer.parse("\n\n").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_engine_summary_skips_trailing_blank_lines() {
        let storage = MockStorage::with_file(DEFAULT_INPUT, "name,qty\nwidget,3\nbroken\n\n\n");
        let engine = ImportEngine::new(storage.clone(), CsvImporter::new(storage.clone()));

        let summary = engine.run(DEFAULT_INPUT).await.unwrap();

        assert_eq!(summary.parsed, 3);
        assert_eq!(summary.retained, 2);
        assert_eq!(summary.rejected(), 1);
    }

    #[tokio::test]
    async fn test_engine_writes_retained_rows() {
        let storage = MockStorage::with_file(DEFAULT_INPUT, "id,name\n1\n2,widget\n3,gadget,blue\n");
        let engine = ImportEngine::new(storage.clone(), CsvImporter::new(storage.clone()));

        let summary = engine.run(DEFAULT_INPUT).await.unwrap();

        assert_eq!(summary.parsed, 4);
        assert_eq!(summary.retained, 3);
        assert_eq!(summary.rejected(), 1);
        assert_eq!(summary.output, DEFAULT_CSV_OUTPUT);

        let written = storage.get_file(DEFAULT_CSV_OUTPUT).await.unwrap();
        assert_eq!(written, "id,name\n2,widget\n3,gadget,blue\n");
        assert_eq!(written.lines().count(), summary.retained);
    }

    #[tokio::test]
    async fn test_engine_with_no_valid_rows_writes_empty_file() {
        let storage = MockStorage::with_file(DEFAULT_INPUT, "one\ntwo\n");
        let engine = ImportEngine::new(storage.clone(), CsvImporter::new(storage.clone()));

        let summary = engine.run(DEFAULT_INPUT).await.unwrap();

        assert_eq!(summary.retained, 0);
        assert_eq!(storage.get_file(DEFAULT_CSV_OUTPUT).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_engine_missing_input_propagates_io_error() {
        let storage = MockStorage::with_file("other.csv", "a,b");
        let engine = ImportEngine::new(storage.clone(), CsvImporter::new(storage.clone()));

        let result = engine.run(DEFAULT_INPUT).await;

        assert!(matches!(result, Err(DemoError::IoError(_))));
        assert!(storage.get_file(DEFAULT_CSV_OUTPUT).await.is_none());
    }

    #[tokio::test]
    async fn test_json_importer_arrays_and_objects() {
        let input = r#"[["a", 1], {"name": "bob", "age": 42}, ["solo"], [true, null, 2.5]]"#;
        let storage = MockStorage::with_file("data.json", input);
        let engine = ImportEngine::new(storage.clone(), JsonImporter::new(storage.clone()));

        let summary = engine.run("data.json").await.unwrap();

        assert_eq!(summary.parsed, 4);
        assert_eq!(summary.retained, 3);

        let written = storage.get_file(DEFAULT_JSON_OUTPUT).await.unwrap();
        let records: Vec<Vec<String>> = serde_json::from_str(&written).unwrap();
        assert_eq!(records[0], vec!["a", "1"]);
        assert_eq!(records[1], vec!["bob", "42"]);
        assert_eq!(records[2], vec!["true", "null", "2.5"]);
    }

    #[test]
    fn test_json_importer_rejects_non_array_documents() {
        let importer = JsonImporter::new(MockStorage::with_file("x", ""));

        assert!(matches!(
            importer.parse(r#"{"a": 1}"#),
            Err(DemoError::ParseError { .. })
        ));
        assert!(matches!(
            importer.parse("[1, 2]"),
            Err(DemoError::ParseError { .. })
        ));
        assert!(matches!(
            importer.parse("not json"),
            Err(DemoError::ParseError { .. })
        ));
    }
}
