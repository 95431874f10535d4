use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_collections_table::Migration),
            Box::new(m20260101_000002_create_suppliers_table::Migration),
            Box::new(m20260101_000003_create_styles_table::Migration),
            Box::new(m20260101_000004_create_passports_table::Migration),
        ]
    }
}

// Migration implementations

mod m20260101_000001_create_collections_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20260101_000001_create_collections_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Collections::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Collections::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Collections::Name).string().not_null())
                        .col(ColumnDef::new(Collections::Season).string().not_null())
                        .col(ColumnDef::new(Collections::Year).integer().not_null())
                        .col(ColumnDef::new(Collections::Description).text().null())
                        .col(
                            ColumnDef::new(Collections::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_collections_year")
                        .table(Collections::Table)
                        .col(Collections::Year)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Collections::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Collections {
        Table,
        Id,
        Name,
        Season,
        Year,
        Description,
        CreatedAt,
    }
}

mod m20260101_000002_create_suppliers_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20260101_000002_create_suppliers_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Suppliers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Suppliers::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Suppliers::Name).string().not_null())
                        .col(ColumnDef::new(Suppliers::Location).string().null())
                        .col(ColumnDef::new(Suppliers::ContactInfo).json().null())
                        .col(
                            ColumnDef::new(Suppliers::SustainabilityScore)
                                .double()
                                .null(),
                        )
                        .col(ColumnDef::new(Suppliers::Certificates).json().null())
                        .col(ColumnDef::new(Suppliers::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_suppliers_name")
                        .table(Suppliers::Table)
                        .col(Suppliers::Name)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Suppliers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Suppliers {
        Table,
        Id,
        Name,
        Location,
        ContactInfo,
        SustainabilityScore,
        Certificates,
        CreatedAt,
    }
}

mod m20260101_000003_create_styles_table {

    use sea_orm_migration::prelude::*;

    use super::m20260101_000001_create_collections_table::Collections;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20260101_000003_create_styles_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Styles::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Styles::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Styles::Name).string().not_null())
                        .col(ColumnDef::new(Styles::CollectionId).uuid().not_null())
                        .col(ColumnDef::new(Styles::Category).string().not_null())
                        .col(ColumnDef::new(Styles::Materials).json().not_null())
                        .col(ColumnDef::new(Styles::TargetPrice).decimal().null())
                        .col(
                            ColumnDef::new(Styles::ProductionLocation)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Styles::Supplier).string().not_null())
                        .col(
                            ColumnDef::new(Styles::CarbonFootprint)
                                .double()
                                .not_null()
                                .default(0.0),
                        )
                        .col(ColumnDef::new(Styles::Status).string().not_null())
                        .col(ColumnDef::new(Styles::ImageUrl).string().null())
                        .col(ColumnDef::new(Styles::PassportId).uuid().null())
                        .col(ColumnDef::new(Styles::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Styles::UpdatedAt).timestamp().null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_styles_collection_id")
                                .from(Styles::Table, Styles::CollectionId)
                                .to(Collections::Table, Collections::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_styles_collection_id")
                        .table(Styles::Table)
                        .col(Styles::CollectionId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_styles_status")
                        .table(Styles::Table)
                        .col(Styles::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_styles_carbon_footprint")
                        .table(Styles::Table)
                        .col(Styles::CarbonFootprint)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Styles::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Styles {
        Table,
        Id,
        Name,
        CollectionId,
        Category,
        Materials,
        TargetPrice,
        ProductionLocation,
        Supplier,
        CarbonFootprint,
        Status,
        ImageUrl,
        PassportId,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20260101_000004_create_passports_table {

    use sea_orm_migration::prelude::*;

    use super::m20260101_000003_create_styles_table::Styles;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20260101_000004_create_passports_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Passports::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Passports::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Passports::StyleId).uuid().not_null())
                        .col(ColumnDef::new(Passports::ProductCode).string().not_null())
                        .col(ColumnDef::new(Passports::Name).string().not_null())
                        .col(
                            ColumnDef::new(Passports::CollectionName)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Passports::Materials).json().not_null())
                        .col(
                            ColumnDef::new(Passports::ProductionLocation)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Passports::CarbonFootprint)
                                .double()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Passports::Certificates).json().not_null())
                        .col(ColumnDef::new(Passports::Supplier).string().not_null())
                        .col(
                            ColumnDef::new(Passports::BlockchainHash)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Passports::QrUrl).string().not_null())
                        .col(ColumnDef::new(Passports::QrCode).text().not_null())
                        .col(ColumnDef::new(Passports::AdditionalInfo).text().null())
                        .col(ColumnDef::new(Passports::CreatedAt).timestamp().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_passports_style_id")
                                .from(Passports::Table, Passports::StyleId)
                                .to(Styles::Table, Styles::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_passports_style_id")
                        .table(Passports::Table)
                        .col(Passports::StyleId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Passports::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Passports {
        Table,
        Id,
        StyleId,
        ProductCode,
        Name,
        CollectionName,
        Materials,
        ProductionLocation,
        CarbonFootprint,
        Certificates,
        Supplier,
        BlockchainHash,
        QrUrl,
        QrCode,
        AdditionalInfo,
        CreatedAt,
    }
}
