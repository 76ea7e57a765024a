use anyhow::{anyhow, Result};

pub fn validate_column(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(anyhow!("column is empty"));
    }
    if value.len() > 3 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(anyhow!("column '{}' must be 1-3 letters", value));
    }
    Ok(())
}
