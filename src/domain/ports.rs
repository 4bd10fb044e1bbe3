use crate::domain::model::Row;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Line-oriented sink every demo prints its transcript to.
pub trait Console {
    fn line(&mut self, text: &str);

    fn warn(&mut self, text: &str) {
        self.line(text);
    }

    fn blank(&mut self) {
        self.line("");
    }
}

/// Overridable steps of an import; reading the input is fixed by the engine.
#[async_trait]
pub trait Importer: Send + Sync {
    fn name(&self) -> &str;
    fn parse(&self, data: &str) -> Result<Vec<Row>>;
    fn validate(&self, rows: Vec<Row>) -> Vec<Row>;
    async fn save(&self, rows: Vec<Row>) -> Result<String>;
}
