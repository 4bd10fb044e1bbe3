use crate::adapters::LocalStorage;
use crate::config::toml_config::{ImportConfig, ImportFormat};
use crate::core::import::{CsvImporter, ImportEngine, JsonImporter};
use crate::domain::model::ImportSummary;
use crate::domain::ports::Console;
use crate::utils::error::Result;

pub async fn run(config: &ImportConfig, out: &mut dyn Console) -> Result<ImportSummary> {
    let storage = LocalStorage::new(config.base_dir.clone());
    let output = config.output_file();

    let summary = match config.format {
        ImportFormat::Csv => {
            let importer = CsvImporter::with_output(storage.clone(), output);
            ImportEngine::new(storage, importer)
                .run(&config.input)
                .await?
        }
        ImportFormat::Json => {
            let importer = JsonImporter::with_output(storage.clone(), output);
            ImportEngine::new(storage, importer)
                .run(&config.input)
                .await?
        }
    };

    out.line(&format!(
        "Imported {} of {} rows from {} into {}",
        summary.retained, summary.parsed, summary.input, summary.output
    ));
    if summary.rejected() > 0 {
        out.line(&format!(
            "Skipped {} rows with fewer than two fields",
            summary.rejected()
        ));
    }

    Ok(summary)
}
