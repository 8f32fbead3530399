use anyhow::{Context, Result};
use contracts::domain::a001_sales_dataset::{DatasetKind, SalesDatasets, SalesRecord};
use std::path::{Path, PathBuf};

fn dataset_path(data_dir: &Path, kind: DatasetKind) -> PathBuf {
    data_dir.join(kind.file_name())
}

async fn read_dataset_file(data_dir: &Path, kind: DatasetKind) -> Result<String> {
    let path = dataset_path(data_dir, kind);
    tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Parsed contents of one dataset file, columns untouched, read fresh from disk
pub async fn load_raw(data_dir: &Path, kind: DatasetKind) -> Result<serde_json::Value> {
    let contents = read_dataset_file(data_dir, kind).await?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", kind.file_name()))
}

/// Records of one dataset
pub async fn load_records(data_dir: &Path, kind: DatasetKind) -> Result<Vec<SalesRecord>> {
    let contents = read_dataset_file(data_dir, kind).await?;
    kind.decode_records(&contents)
        .with_context(|| format!("Failed to parse {}", kind.file_name()))
}

/// All four datasets; fails if any of them cannot be loaded
pub async fn load_all(data_dir: &Path) -> Result<SalesDatasets> {
    let (team, customer_type, acv_range, account_industry) = tokio::try_join!(
        load_records(data_dir, DatasetKind::Team),
        load_records(data_dir, DatasetKind::CustomerType),
        load_records(data_dir, DatasetKind::AcvRange),
        load_records(data_dir, DatasetKind::AccountIndustry),
    )?;

    Ok(SalesDatasets {
        team,
        customer_type,
        acv_range,
        account_industry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_sales_dataset::Category;

    fn write(dir: &Path, kind: DatasetKind, contents: &str) {
        std::fs::write(dir.join(kind.file_name()), contents).unwrap();
    }

    #[tokio::test]
    async fn test_load_raw_keeps_every_column() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            DatasetKind::Team,
            r#"[{"Team": "Enterprise", "count": 3.5, "acv": 1500.0, "closed_fiscal_quarter": "2023-Q4", "query_key": "team"}]"#,
        );

        let value = load_raw(dir.path(), DatasetKind::Team).await.unwrap();
        assert_eq!(value[0]["Team"], "Enterprise");
        assert_eq!(value[0]["count"], 3.5);
        assert_eq!(value[0]["query_key"], "team");

        // The typed decoding used by the analytics routes stays strict
        assert!(load_records(dir.path(), DatasetKind::Team).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(dir.path(), DatasetKind::AcvRange).await.unwrap_err();
        assert!(err.to_string().contains("ACV Range.json"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), DatasetKind::CustomerType, "{ not json");
        assert!(load_records(dir.path(), DatasetKind::CustomerType).await.is_err());
    }

    #[tokio::test]
    async fn test_load_all() {
        let dir = tempfile::tempdir().unwrap();
        for kind in DatasetKind::ALL {
            write(
                dir.path(),
                kind,
                &format!(
                    r#"[{{"{}": "X", "count": 1, "acv": 10, "closed_fiscal_quarter": "2024-Q1"}}]"#,
                    kind.category_column()
                ),
            );
        }

        let datasets = load_all(dir.path()).await.unwrap();
        assert_eq!(datasets.team.len(), 1);
        assert_eq!(
            datasets.account_industry[0].category,
            Category::Industry("X".to_string())
        );

        std::fs::remove_file(dir.path().join(DatasetKind::Team.file_name())).unwrap();
        assert!(load_all(dir.path()).await.is_err());
    }
}
