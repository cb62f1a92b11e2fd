use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_stores_table::Migration),
            Box::new(m20240301_000002_create_catalog_tables::Migration),
            Box::new(m20240301_000003_create_store_inventory_table::Migration),
            Box::new(m20240301_000004_create_order_tables::Migration),
            Box::new(m20240301_000005_create_sale_records_table::Migration),
            Box::new(m20240301_000006_create_supply_requests_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240301_000001_create_stores_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000001_create_stores_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Stores::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Stores::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Stores::Code)
                                .string_len(32)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Stores::Name).string().not_null())
                        .col(ColumnDef::new(Stores::Contact).string_len(32).not_null())
                        .col(ColumnDef::new(Stores::Address).string().not_null())
                        .col(ColumnDef::new(Stores::ManagerName).string().not_null())
                        .col(
                            ColumnDef::new(Stores::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Stores::NextOrderSeq)
                                .big_integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Stores::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_stores_is_active")
                        .table(Stores::Table)
                        .col(Stores::IsActive)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Stores::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Stores {
        Table,
        Id,
        Code,
        Name,
        Contact,
        Address,
        ManagerName,
        IsActive,
        NextOrderSeq,
        CreatedAt,
    }
}

mod m20240301_000002_create_catalog_tables {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000002_create_catalog_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Ingredients::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Ingredients::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Ingredients::Name).string().not_null())
                        .col(ColumnDef::new(Ingredients::Unit).string_len(16).not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Menus::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Menus::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Menus::Name).string().not_null())
                        .col(ColumnDef::new(Menus::Price).decimal_len(12, 2).not_null())
                        .col(ColumnDef::new(Menus::SetPrice).decimal_len(12, 2).null())
                        .col(ColumnDef::new(Menus::Category).string_len(32).not_null())
                        .col(ColumnDef::new(Menus::Description).string().null())
                        .col(
                            ColumnDef::new(Menus::IsSoldOut)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(MenuOptions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MenuOptions::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(MenuOptions::MenuId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(MenuOptions::Name).string().not_null())
                        .col(
                            ColumnDef::new(MenuOptions::PriceDelta)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(MenuOptions::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(MenuOptions::SortOrder)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_menu_options_menu_id")
                                .from(MenuOptions::Table, MenuOptions::MenuId)
                                .to(Menus::Table, Menus::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_menu_options_menu_id")
                        .table(MenuOptions::Table)
                        .col(MenuOptions::MenuId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(RecipeLines::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(RecipeLines::MenuId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(RecipeLines::IngredientId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(RecipeLines::RequiredQuantity)
                                .integer()
                                .not_null(),
                        )
                        .primary_key(
                            Index::create()
                                .col(RecipeLines::MenuId)
                                .col(RecipeLines::IngredientId),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_recipe_lines_menu_id")
                                .from(RecipeLines::Table, RecipeLines::MenuId)
                                .to(Menus::Table, Menus::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_recipe_lines_ingredient_id")
                                .from(RecipeLines::Table, RecipeLines::IngredientId)
                                .to(Ingredients::Table, Ingredients::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(OptionRecipeLines::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(OptionRecipeLines::OptionId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OptionRecipeLines::IngredientId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OptionRecipeLines::DeltaQuantity)
                                .integer()
                                .not_null(),
                        )
                        .primary_key(
                            Index::create()
                                .col(OptionRecipeLines::OptionId)
                                .col(OptionRecipeLines::IngredientId),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_option_recipe_lines_option_id")
                                .from(OptionRecipeLines::Table, OptionRecipeLines::OptionId)
                                .to(MenuOptions::Table, MenuOptions::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_option_recipe_lines_ingredient_id")
                                .from(OptionRecipeLines::Table, OptionRecipeLines::IngredientId)
                                .to(Ingredients::Table, Ingredients::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(OptionRecipeLines::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(RecipeLines::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(MenuOptions::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Menus::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Ingredients::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Ingredients {
        Table,
        Id,
        Name,
        Unit,
    }

    #[derive(DeriveIden)]
    enum Menus {
        Table,
        Id,
        Name,
        Price,
        SetPrice,
        Category,
        Description,
        IsSoldOut,
    }

    #[derive(DeriveIden)]
    enum MenuOptions {
        Table,
        Id,
        MenuId,
        Name,
        PriceDelta,
        IsActive,
        SortOrder,
    }

    #[derive(DeriveIden)]
    enum RecipeLines {
        Table,
        MenuId,
        IngredientId,
        RequiredQuantity,
    }

    #[derive(DeriveIden)]
    enum OptionRecipeLines {
        Table,
        OptionId,
        IngredientId,
        DeltaQuantity,
    }
}

mod m20240301_000003_create_store_inventory_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000003_create_store_inventory_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(StoreInventory::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(StoreInventory::StoreId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(StoreInventory::IngredientId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(StoreInventory::Quantity)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(StoreInventory::MinThreshold)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .primary_key(
                            Index::create()
                                .col(StoreInventory::StoreId)
                                .col(StoreInventory::IngredientId),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_store_inventory_store_id")
                                .from(StoreInventory::Table, StoreInventory::StoreId)
                                .to(Stores::Table, Stores::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_store_inventory_ingredient_id")
                                .from(StoreInventory::Table, StoreInventory::IngredientId)
                                .to(Ingredients::Table, Ingredients::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(StoreInventory::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum StoreInventory {
        Table,
        StoreId,
        IngredientId,
        Quantity,
        MinThreshold,
    }

    #[derive(DeriveIden)]
    enum Stores {
        Table,
        Id,
    }

    #[derive(DeriveIden)]
    enum Ingredients {
        Table,
        Id,
    }
}

mod m20240301_000004_create_order_tables {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000004_create_order_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Orders::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Orders::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Orders::StoreId).big_integer().not_null())
                        .col(
                            ColumnDef::new(Orders::OrderNumber)
                                .string_len(64)
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(Orders::TotalAmount)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Orders::Status).string_len(16).not_null())
                        .col(
                            ColumnDef::new(Orders::PlacedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_orders_store_id")
                                .from(Orders::Table, Orders::StoreId)
                                .to(Stores::Table, Stores::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_orders_store_id")
                        .table(Orders::Table)
                        .col(Orders::StoreId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_orders_status")
                        .table(Orders::Table)
                        .col(Orders::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_orders_placed_at")
                        .table(Orders::Table)
                        .col(Orders::PlacedAt)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(OrderDetails::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(OrderDetails::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(OrderDetails::OrderId).uuid().not_null())
                        .col(
                            ColumnDef::new(OrderDetails::MenuId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(OrderDetails::Quantity).integer().not_null())
                        .col(
                            ColumnDef::new(OrderDetails::IsSet)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(OrderDetails::UnitPrice)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OrderDetails::Subtotal)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_order_details_order_id")
                                .from(OrderDetails::Table, OrderDetails::OrderId)
                                .to(Orders::Table, Orders::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_order_details_menu_id")
                                .from(OrderDetails::Table, OrderDetails::MenuId)
                                .to(Menus::Table, Menus::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_order_details_order_id")
                        .table(OrderDetails::Table)
                        .col(OrderDetails::OrderId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_order_details_menu_id")
                        .table(OrderDetails::Table)
                        .col(OrderDetails::MenuId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(OrderDetailOptions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(OrderDetailOptions::OrderDetailId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OrderDetailOptions::OptionId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(OrderDetailOptions::OptionQuantity)
                                .integer()
                                .not_null()
                                .default(1),
                        )
                        .primary_key(
                            Index::create()
                                .col(OrderDetailOptions::OrderDetailId)
                                .col(OrderDetailOptions::OptionId),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_order_detail_options_order_detail_id")
                                .from(
                                    OrderDetailOptions::Table,
                                    OrderDetailOptions::OrderDetailId,
                                )
                                .to(OrderDetails::Table, OrderDetails::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_order_detail_options_option_id")
                                .from(OrderDetailOptions::Table, OrderDetailOptions::OptionId)
                                .to(MenuOptions::Table, MenuOptions::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(OrderDetailOptions::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(OrderDetails::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Orders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Orders {
        Table,
        Id,
        StoreId,
        OrderNumber,
        TotalAmount,
        Status,
        PlacedAt,
    }

    #[derive(DeriveIden)]
    enum OrderDetails {
        Table,
        Id,
        OrderId,
        MenuId,
        Quantity,
        IsSet,
        UnitPrice,
        Subtotal,
    }

    #[derive(DeriveIden)]
    enum OrderDetailOptions {
        Table,
        OrderDetailId,
        OptionId,
        OptionQuantity,
    }

    #[derive(DeriveIden)]
    enum Stores {
        Table,
        Id,
    }

    #[derive(DeriveIden)]
    enum Menus {
        Table,
        Id,
    }

    #[derive(DeriveIden)]
    enum MenuOptions {
        Table,
        Id,
    }
}

mod m20240301_000005_create_sale_records_table {

    use sea_orm_migration::prelude::*;

    use super::m20240301_000004_create_order_tables::Orders;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000005_create_sale_records_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SaleRecords::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SaleRecords::OrderId)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(SaleRecords::PaymentMethod)
                                .string_len(16)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SaleRecords::TotalPrice)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_sale_records_order_id")
                                .from(SaleRecords::Table, SaleRecords::OrderId)
                                .to(Orders::Table, Orders::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SaleRecords::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum SaleRecords {
        Table,
        OrderId,
        PaymentMethod,
        TotalPrice,
    }
}

mod m20240301_000006_create_supply_requests_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000006_create_supply_requests_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SupplyRequests::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SupplyRequests::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(SupplyRequests::StoreId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplyRequests::IngredientId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplyRequests::Quantity)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplyRequests::Status)
                                .string_len(16)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplyRequests::RequestedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplyRequests::ProcessedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_supply_requests_store_id")
                                .from(SupplyRequests::Table, SupplyRequests::StoreId)
                                .to(Stores::Table, Stores::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_supply_requests_ingredient_id")
                                .from(SupplyRequests::Table, SupplyRequests::IngredientId)
                                .to(Ingredients::Table, Ingredients::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_supply_requests_status")
                        .table(SupplyRequests::Table)
                        .col(SupplyRequests::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_supply_requests_store_id")
                        .table(SupplyRequests::Table)
                        .col(SupplyRequests::StoreId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SupplyRequests::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum SupplyRequests {
        Table,
        Id,
        StoreId,
        IngredientId,
        Quantity,
        Status,
        RequestedAt,
        ProcessedAt,
    }

    #[derive(DeriveIden)]
    enum Stores {
        Table,
        Id,
    }

    #[derive(DeriveIden)]
    enum Ingredients {
        Table,
        Id,
    }
}
