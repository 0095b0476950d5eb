use sea_orm::{EnumIter, Iterable};
use sea_orm_migration::prelude::*;

use crate::datatype::timestamp;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IndexingRules::Table)
                    .col(
                        ColumnDef::new(IndexingRules::Deployment)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(IndexingRules::AllocationAmount).decimal())
                    .col(ColumnDef::new(IndexingRules::ParallelAllocations).integer())
                    .col(ColumnDef::new(IndexingRules::MaxAllocationPercentage).decimal())
                    .col(ColumnDef::new(IndexingRules::MinSignal).decimal())
                    .col(ColumnDef::new(IndexingRules::MaxSignal).decimal())
                    .col(ColumnDef::new(IndexingRules::MinStake).decimal())
                    .col(ColumnDef::new(IndexingRules::MinAverageQueryFees).decimal())
                    .col(ColumnDef::new(IndexingRules::Custom).text())
                    .col(
                        ColumnDef::new(IndexingRules::DecisionBasis)
                            .enumeration(DecisionBasisEnum, DecisionBasis::iter())
                            .not_null()
                            .default("rules"),
                    )
                    .col(timestamp(IndexingRules::CreatedAt, manager))
                    .col(timestamp(IndexingRules::UpdatedAt, manager))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(IndexingRules::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum IndexingRules {
    #[iden = "IndexingRules"]
    Table,
    #[iden = "deployment"]
    Deployment,
    #[iden = "allocationAmount"]
    AllocationAmount,
    #[iden = "parallelAllocations"]
    ParallelAllocations,
    #[iden = "maxAllocationPercentage"]
    MaxAllocationPercentage,
    #[iden = "minSignal"]
    MinSignal,
    #[iden = "maxSignal"]
    MaxSignal,
    #[iden = "minStake"]
    MinStake,
    #[iden = "minAverageQueryFees"]
    MinAverageQueryFees,
    #[iden = "custom"]
    Custom,
    #[iden = "decisionBasis"]
    DecisionBasis,
    #[iden = "createdAt"]
    CreatedAt,
    #[iden = "updatedAt"]
    UpdatedAt,
}

#[derive(Iden)]
pub struct DecisionBasisEnum;

#[derive(Iden, EnumIter)]
pub enum DecisionBasis {
    #[iden = "rules"]
    Rules,
    #[iden = "never"]
    Never,
    #[iden = "always"]
    Always,
}
