use async_trait::async_trait;

/// Remote tabular store holding the inventory sheet.
#[async_trait]
pub trait SpreadsheetClient: Send + Sync {
    async fn read_range(
        &self,
        spreadsheet_id: &str,
        range: &str,
    ) -> anyhow::Result<Vec<Vec<String>>>;

    async fn update_range(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: Vec<Vec<String>>,
    ) -> anyhow::Result<()>;
}
