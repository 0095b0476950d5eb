use sea_orm::{ConnectionTrait, DatabaseBackend, EnumIter, Iterable, TransactionTrait};
use sea_orm_migration::prelude::*;

use crate::m20250310_000001_create_indexing_rules_table::IndexingRules;

#[derive(DeriveMigrationName)]
pub struct Migration;

const INDEXING_RULES_TABLE: &str = "IndexingRules";
const IDENTIFIER_COLUMN: &str = "identifier";
const IDENTIFIER_TYPE_COLUMN: &str = "identifierType";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        tracing::info!("Checking if the indexing rules table exists");
        if !manager.has_table(INDEXING_RULES_TABLE).await? {
            tracing::info!("Indexing rules table does not exist, nothing to migrate");
            return Ok(());
        }

        tracing::info!("Checking if the indexing rules table is already migrated");
        if manager
            .has_column(INDEXING_RULES_TABLE, IDENTIFIER_TYPE_COLUMN)
            .await?
            && manager
                .has_column(INDEXING_RULES_TABLE, IDENTIFIER_COLUMN)
                .await?
        {
            tracing::info!("identifier and identifierType columns already exist, nothing to migrate");
            return Ok(());
        }

        tracing::info!("Adding identifierType column to the indexing rules table");
        manager
            .alter_table(
                Table::alter()
                    .table(IndexingRules::Table)
                    .add_column(
                        ColumnDef::new(IndexingRulesNew::IdentifierType)
                            .enumeration(IdentifierTypeEnum, IdentifierType::iter())
                            .not_null()
                            .default("group"),
                    )
                    .to_owned(),
            )
            .await?;

        // SQLite cannot extend a primary key through ALTER TABLE
        if manager.get_database_backend() == DatabaseBackend::MySql {
            manager
                .get_connection()
                .execute_unprepared(
                    "ALTER TABLE `IndexingRules` DROP PRIMARY KEY, ADD PRIMARY KEY (`deployment`, `identifierType`)",
                )
                .await?;
        }

        tracing::info!("Renaming deployment column to identifier");
        manager
            .alter_table(
                Table::alter()
                    .table(IndexingRules::Table)
                    .rename_column(IndexingRules::Deployment, IndexingRulesNew::Identifier)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        tracing::info!("Dropping identifierType column and renaming identifier back to deployment");
        if !manager.has_table(INDEXING_RULES_TABLE).await? {
            return Ok(());
        }

        let backend = manager.get_database_backend();
        let txn = manager.get_connection().begin().await?;

        let drop_identifier_type = Table::alter()
            .table(IndexingRules::Table)
            .drop_column(IndexingRulesNew::IdentifierType)
            .to_owned();
        txn.execute(backend.build(&drop_identifier_type)).await?;

        let restore_deployment = Table::alter()
            .table(IndexingRules::Table)
            .rename_column(IndexingRulesNew::Identifier, IndexingRules::Deployment)
            .to_owned();
        txn.execute(backend.build(&restore_deployment)).await?;

        txn.commit().await
    }
}

#[derive(Iden)]
pub enum IndexingRulesNew {
    #[iden = "identifier"]
    Identifier,
    #[iden = "identifierType"]
    IdentifierType,
}

#[derive(Iden)]
pub struct IdentifierTypeEnum;

#[derive(Iden, EnumIter)]
pub enum IdentifierType {
    #[iden = "deployment"]
    Deployment,
    #[iden = "subgraph"]
    Subgraph,
    #[iden = "group"]
    Group,
}
