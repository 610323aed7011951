use sea_orm::entity::prelude::*;

/// Lifecycle state of an auction. Stored as an integer column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum AuctionStatus {
    #[sea_orm(num_value = 0)]
    Active,
    #[sea_orm(num_value = 1)]
    Completed,
}

/// Condition of the product being auctioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum ProductCondition {
    #[sea_orm(num_value = 1)]
    New,
    #[sea_orm(num_value = 2)]
    Used,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "auction")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub product_name: String,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub condition: ProductCondition,
    pub status: AuctionStatus,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bid::Entity")]
    Bid,
}

impl Related<super::bid::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bid.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
