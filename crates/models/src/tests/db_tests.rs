use crate::db::{connect_in_memory, connect_with_config};
use configs::DatabaseConfig;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use anyhow::Result;

#[tokio::test]
async fn in_memory_database_is_migrated() -> Result<()> {
    let db = connect_in_memory().await?;
    let stmt = Statement::from_string(
        DatabaseBackend::Sqlite,
        "SELECT COUNT(*) AS n FROM contact".to_string(),
    );
    let row = db.query_one(stmt).await?.expect("count row");
    let n: i64 = row.try_get("", "n")?;
    assert_eq!(n, 0);
    Ok(())
}

#[tokio::test]
async fn invalid_config_is_rejected_before_connecting() {
    let cfg = DatabaseConfig { url: "mysql://localhost/contacts".into(), ..Default::default() };
    assert!(connect_with_config(&cfg).await.is_err());
}
