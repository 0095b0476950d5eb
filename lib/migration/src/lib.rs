use sea_orm_migration::migrator::MigratorTrait;
use sea_orm_migration::prelude::*;

pub(crate) mod datatype;

pub mod m20250310_000001_create_indexing_rules_table;
pub mod m20250316_104528_rename_deployment_add_identifier_type;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250310_000001_create_indexing_rules_table::Migration),
            Box::new(m20250316_104528_rename_deployment_add_identifier_type::Migration),
        ]
    }
}
