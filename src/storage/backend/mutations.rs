//! Write operations for SeaOrmStorage

use sea_orm::{ActiveValue::Set, DbErr, EntityTrait, SqlErr};
use tracing::debug;

use super::SeaOrmStorage;
use crate::errors::{CrclinkError, Result};

use migration::entities::url_record;

/// 判断是否为主键 / 唯一约束冲突
pub fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }

    // 回退到驱动错误码
    match err {
        DbErr::Exec(runtime_err) | DbErr::Query(runtime_err) => {
            use sea_orm::error::RuntimeErr;
            match runtime_err {
                RuntimeErr::SqlxError(sqlx_err) => {
                    use std::ops::Deref;
                    sqlx_err
                        .deref()
                        .as_database_error()
                        .and_then(|db_err| db_err.code())
                        .is_some_and(|code| {
                            matches!(
                                code.as_ref(),
                                // SQLite PRIMARYKEY / UNIQUE
                                "1555" | "2067" |
                                // MySQL ER_DUP_ENTRY
                                "1062" |
                                // PostgreSQL unique_violation
                                "23505"
                            )
                        })
                }
                #[allow(unreachable_patterns)]
                _ => false,
            }
        }
        _ => false,
    }
}

impl SeaOrmStorage {
    pub async fn insert_url(&self, id: &str, url: &str) -> Result<()> {
        let model = url_record::ActiveModel {
            id: Set(id.to_owned()),
            url: Set(url.to_owned()),
        };

        match url_record::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
        {
            Ok(_) => {
                debug!("URL stored: {} -> {}", id, url);
                Ok(())
            }
            Err(e) if is_unique_violation(&e) => Err(CrclinkError::unique_violation(format!(
                "can't insert URL: already exists: {}",
                id
            ))),
            Err(e) => Err(CrclinkError::database_operation(format!(
                "can't insert URL: {}",
                e
            ))),
        }
    }
}
